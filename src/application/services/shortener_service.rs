//! Short URL creation and lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::{CreateOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code};

/// Upper bound on code-generation attempts before a shorten request fails.
///
/// A defensive ceiling, not an expected path: at a 62^6 keyspace even one
/// collision is rare.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service orchestrating the mapping store.
///
/// Owns the generate-and-register retry protocol and translates store
/// absences into [`AppError::NotFound`] for the HTTP boundary.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenerService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short code for `original_url` and returns it.
    ///
    /// Generates candidate codes and attempts to register each one, retrying
    /// on collision up to [`MAX_CODE_ATTEMPTS`] times. The URL is expected to
    /// be validated by the caller; the store treats it as opaque.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Exhausted`] when every attempt collided. This is a
    /// service-level failure worth alerting on, never a lookup miss.
    pub async fn shorten(&self, original_url: String) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(CODE_LENGTH);

            match self.repository.create(&original_url, &code).await? {
                CreateOutcome::Created => {
                    tracing::debug!(code, "registered short code");
                    return Ok(code);
                }
                CreateOutcome::Collision => {
                    tracing::warn!(code, "short code collision, retrying");
                }
            }
        }

        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository.resolve(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }

    /// Returns the stats snapshot for a short code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    pub async fn stats(&self, code: &str) -> Result<UrlEntry, AppError> {
        self.repository.stats(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }

    /// Number of codes currently tracked by the store.
    pub async fn tracked_codes(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
