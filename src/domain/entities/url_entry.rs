//! Entry entity representing one shortened URL mapping.

use chrono::{DateTime, Utc};

/// The stored record for a single short code.
///
/// Created exactly once when the code is registered and never replaced
/// afterwards. Only the click counter changes over the entry's lifetime.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    pub original_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl UrlEntry {
    /// Creates a fresh entry with zero clicks, stamped with the current time.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    /// Increments the click counter by exactly one.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_starts_with_zero_clicks() {
        let entry = UrlEntry::new("https://example.com");

        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(entry.clicks, 0);
    }

    #[test]
    fn test_created_at_is_set_on_construction() {
        let before = Utc::now();
        let entry = UrlEntry::new("https://example.com");
        let after = Utc::now();

        assert!(entry.created_at >= before);
        assert!(entry.created_at <= after);
    }

    #[test]
    fn test_record_click_increments_by_one() {
        let mut entry = UrlEntry::new("https://example.com");

        entry.record_click();
        assert_eq!(entry.clicks, 1);

        entry.record_click();
        entry.record_click();
        assert_eq!(entry.clicks, 3);
    }

    #[test]
    fn test_record_click_does_not_touch_other_fields() {
        let mut entry = UrlEntry::new("https://example.com/page");
        let created_at = entry.created_at;

        entry.record_click();

        assert_eq!(entry.original_url, "https://example.com/page");
        assert_eq!(entry.created_at, created_at);
    }
}
