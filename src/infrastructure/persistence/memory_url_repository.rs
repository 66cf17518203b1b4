//! In-memory implementation of [`UrlRepository`].
//!
//! The whole table is one shared `HashMap` behind a `RwLock`. Both mutating
//! operations are check-then-act sequences, so they take the write lock for
//! their full duration: the existence check and the insert of `create`, and
//! the lookup and the increment of `resolve`, are each indivisible. Snapshot
//! reads share the read lock and never block each other.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::{CreateOutcome, UrlRepository};
use crate::error::AppError;

/// The authoritative code-to-entry table, held entirely in memory.
///
/// Entries are owned exclusively by the table; readers receive clones. Nothing
/// is ever removed, so a code observed as taken stays taken for the lifetime
/// of the process.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    entries: RwLock<HashMap<String, UrlEntry>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, original_url: &str, code: &str) -> Result<CreateOutcome, AppError> {
        let mut entries = self.entries.write().expect("url table lock poisoned");

        match entries.entry(code.to_owned()) {
            Entry::Occupied(_) => Ok(CreateOutcome::Collision),
            Entry::Vacant(slot) => {
                slot.insert(UrlEntry::new(original_url));
                Ok(CreateOutcome::Created)
            }
        }
    }

    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut entries = self.entries.write().expect("url table lock poisoned");

        Ok(entries.get_mut(code).map(|entry| {
            entry.record_click();
            entry.original_url.clone()
        }))
    }

    async fn stats(&self, code: &str) -> Result<Option<UrlEntry>, AppError> {
        let entries = self.entries.read().expect("url table lock poisoned");

        Ok(entries.get(code).cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let entries = self.entries.read().expect("url table lock poisoned");

        Ok(entries.len())
    }
}
