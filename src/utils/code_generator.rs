//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet.
//! The generator itself makes no uniqueness promise; collisions are handled
//! by the retry protocol in
//! [`crate::application::services::ShortenerService`].

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated short code.
///
/// At 62^6 (roughly 56.8 billion) possible codes, collisions are vanishingly
/// rare at this service's scale.
pub const CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric code of `length` characters.
///
/// Each character is drawn independently and uniformly from
/// `[a-zA-Z0-9]`. Not cryptographically secure, and deliberately so: code
/// unpredictability is not a security boundary here.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
