use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::state::AppState;
use crate::utils::errors::{internal_error, AppResult};

/// Exposición de métricas en formato texto de Prometheus
pub async fn metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = state
        .metrics
        .render()
        .map_err(|e| internal_error(&format!("failed to encode metrics: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
