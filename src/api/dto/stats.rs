//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics snapshot for a short code.
///
/// `created_at` serializes as an RFC 3339 timestamp.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}
