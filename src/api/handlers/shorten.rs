//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_http_url;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// { "short_code": "aZ31bQ", "short_url": "http://sho.rt/aZ31bQ" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a syntactically invalid or non-HTTP(S) URL.
/// Returns 500 if the code allocation protocol exhausted its retry budget.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    // The validator derive accepts any scheme; the store only ever receives
    // pre-validated HTTP(S) URLs.
    validate_http_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL provided", json!({ "reason": e.to_string() }))
    })?;

    let short_code = state.shortener.shorten(payload.url).await?;
    let short_url = state.shortener.short_url(&state.base_url, &short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code,
            short_url,
        }),
    ))
}
