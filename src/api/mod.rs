//! API endpoints
//! 
//! Este módulo contiene los endpoints de la API.

pub mod health;
pub mod metrics;
pub mod search;

use axum::{routing::get, Router};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/search", get(search::search))
        .route("/metrics", get(metrics::metrics))
}
