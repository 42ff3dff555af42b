//! Process-lifetime memo of bracket tables, keyed by tax year.
//!
//! One reader/writer lock guards the whole map. Contention is bounded by the
//! number of distinct years (a few dozen at most); if that ever changes,
//! per-key locking is the first thing to reach for. Entries are never
//! evicted.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::TaxBracket;

#[derive(Debug, Default)]
pub struct BracketCache {
    entries: RwLock<HashMap<i32, Arc<[TaxBracket]>>>,
}

impl BracketCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the brackets for `year`. Concurrent readers do not block
    /// each other.
    pub fn get(&self, year: i32) -> Option<Arc<[TaxBracket]>> {
        // Values are immutable Arcs, so a poisoned lock still holds a
        // consistent map.
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&year).cloned()
    }

    /// Insert or replace the entry for `year`.
    pub fn set(&self, year: i32, brackets: Arc<[TaxBracket]>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(year, brackets);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
