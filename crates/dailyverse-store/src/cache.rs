//! Single-slot cache of today's poem

use crate::blob::{load_blob, save_blob};
use crate::kv::KeyValueStore;
use chrono::{DateTime, NaiveDate, Utc};
use dailyverse_core::{local_day, Poem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub const CACHE_KEY: &str = "daily_poem_cache";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedPoem {
    pub poem: Poem,
    pub cached_at: DateTime<Utc>,
}

impl CachedPoem {
    pub fn cached_day(&self) -> NaiveDate {
        local_day(self.cached_at)
    }
}

/// Holds at most one poem, valid for the local calendar day it was cached on
pub struct PoemCache {
    kv: Arc<dyn KeyValueStore>,
    slot: Option<CachedPoem>,
}

impl PoemCache {
    pub fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        let slot: Option<CachedPoem> = load_blob(kv.as_ref(), CACHE_KEY);
        Self { kv, slot }
    }

    /// The cached poem if it was cached on `today`
    pub fn get_for_day(&self, today: NaiveDate) -> Option<&Poem> {
        self.slot
            .as_ref()
            .filter(|c| c.cached_day() == today)
            .map(|c| &c.poem)
    }

    pub fn current(&self) -> Option<&CachedPoem> {
        self.slot.as_ref()
    }

    /// Replace the slot
    pub fn store(&mut self, poem: Poem, now: DateTime<Utc>) {
        let entry = CachedPoem {
            poem,
            cached_at: now,
        };
        if let Err(e) = save_blob(self.kv.as_ref(), CACHE_KEY, &Some(&entry)) {
            warn!("Failed to persist poem cache: {}", e);
        }
        self.slot = Some(entry);
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.kv.remove(CACHE_KEY) {
            warn!("Failed to clear poem cache: {}", e);
        }
        self.slot = None;
    }
}
