//! Repository trait for short URL data access.

use crate::domain::entities::UrlEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an attempted code registration.
///
/// A collision is an ordinary outcome of the create protocol, not an error:
/// the calling layer reacts to it by retrying with a fresh candidate code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The code was free and the entry is now registered.
    Created,
    /// The code is already taken. Nothing was mutated.
    Collision,
}

/// Repository interface for the code-to-URL mapping table.
///
/// Every operation is atomic from the caller's perspective: concurrent calls
/// against the same code serialize, and no caller ever observes a partially
/// initialized entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Registers `code` for `original_url` if the code is not already taken.
    ///
    /// Under concurrent calls with the same code, exactly one caller observes
    /// [`CreateOutcome::Created`]; all others observe [`CreateOutcome::Collision`].
    /// An existing entry is never overwritten.
    ///
    /// The URL is stored as an opaque string; validation belongs to the caller.
    async fn create(&self, original_url: &str, code: &str) -> Result<CreateOutcome, AppError>;

    /// Looks up `code` and, if present, increments its click counter.
    ///
    /// Returns the original URL recorded for the code, or `None` without any
    /// mutation when the code was never created. The increment and the returned
    /// URL belong to the same entry state: N concurrent resolves of one code
    /// raise its counter by exactly N.
    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Returns a read-only snapshot of the entry for `code`, or `None`.
    ///
    /// Never mutates state; repeated calls without an intervening resolve
    /// return identical snapshots.
    async fn stats(&self, code: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Returns the number of registered codes.
    async fn count(&self) -> Result<usize, AppError>;
}
