//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "clicks": 3,
///   "created_at": "2026-08-30T12:34:56.789Z"
/// }
/// ```
///
/// Reading stats never mutates state; the click counter is only advanced by
/// the redirect endpoint.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let entry = state.shortener.stats(&code).await?;

    Ok(Json(StatsResponse {
        url: entry.original_url,
        clicks: entry.clicks,
        created_at: entry.created_at,
    }))
}
