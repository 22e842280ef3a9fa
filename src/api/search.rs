//! Endpoint de búsqueda de tarifas

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use validator::Validate;

use crate::dto::SearchQuery;
use crate::models::Quote;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// `GET /search?origin=BOM&destination=DEL&date=2026-01-05`
///
/// Siempre responde 200 con una cotización (en vivo, cacheada o de respaldo)
/// para una query válida.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<Quote>> {
    state.metrics.record_search();

    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    query.validate()?;

    log::info!(
        "🔍 Search request: {} -> {} ({})",
        query.origin,
        query.destination,
        query.date.as_deref().unwrap_or("default date")
    );

    let quote = state
        .fares
        .lookup(&query.origin, &query.destination, query.departure_date())
        .await;
    state.metrics.record_quote(&quote);

    Ok(Json(quote))
}
