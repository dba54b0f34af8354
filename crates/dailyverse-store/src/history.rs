//! Log of viewed poems, newest first

use crate::blob::{load_blob, save_blob};
use crate::kv::KeyValueStore;
use crate::streak::compute_streak;
use chrono::{DateTime, NaiveDate, Utc};
use dailyverse_core::{local_day, HistorySource, Poem, PoemHistoryEntry, StreakInfo, Vibe};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

pub const HISTORY_KEY: &str = "poem_history";

/// Aggregate counts over the history log
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_entries: usize,
    pub total_days: usize,
    pub by_source: BTreeMap<HistorySource, usize>,
    pub by_vibe: BTreeMap<Vibe, usize>,
}

/// Append-only (apart from deletes) history, capped to `capacity` entries.
/// The same poem viewed twice on one local day is recorded once.
pub struct HistoryStore {
    kv: Arc<dyn KeyValueStore>,
    entries: Vec<PoemHistoryEntry>,
    capacity: usize,
}

impl HistoryStore {
    pub fn open(kv: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        let mut entries: Vec<PoemHistoryEntry> = load_blob(kv.as_ref(), HISTORY_KEY);
        entries.sort_by(|a, b| b.viewed_date.cmp(&a.viewed_date));
        entries.truncate(capacity);
        Self {
            kv,
            entries,
            capacity,
        }
    }

    /// Record a view. Returns `None` when this poem was already recorded on
    /// the same local day, or when the entry would fall outside the capacity.
    pub fn record(
        &mut self,
        poem: Poem,
        source: HistorySource,
        vibe_at_time: Option<Vibe>,
        now: DateTime<Utc>,
    ) -> Option<PoemHistoryEntry> {
        let today = local_day(now);
        if self
            .entries
            .iter()
            .any(|e| e.poem.id == poem.id && e.viewed_day() == today)
        {
            debug!("Poem {} already in history for {}", poem.id, today);
            return None;
        }

        let pos = self.entries.partition_point(|e| e.viewed_date > now);
        if pos >= self.capacity {
            debug!("History full of newer entries, not recording {}", poem.id);
            return None;
        }

        let entry = PoemHistoryEntry::new(poem, now, source, vibe_at_time);
        self.entries.insert(pos, entry.clone());

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!("History over capacity, evicted {} oldest entries", evicted);
        }

        self.persist();
        Some(entry)
    }

    pub fn entries(&self) -> &[PoemHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries grouped by local day, newest day first
    pub fn grouped_by_date(&self) -> Vec<(NaiveDate, Vec<PoemHistoryEntry>)> {
        let mut groups: Vec<(NaiveDate, Vec<PoemHistoryEntry>)> = Vec::new();
        for entry in &self.entries {
            let day = entry.viewed_day();
            match groups.last_mut() {
                Some((d, group)) if *d == day => group.push(entry.clone()),
                _ => groups.push((day, vec![entry.clone()])),
            }
        }
        groups
    }

    pub fn delete(&mut self, entry_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != entry_id);
        let removed = self.entries.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.kv.remove(HISTORY_KEY) {
            warn!("Failed to clear history: {}", e);
        }
    }

    pub fn distinct_days(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.viewed_day()).collect()
    }

    pub fn streak_info(&self, today: NaiveDate) -> StreakInfo {
        compute_streak(&self.distinct_days(), today)
    }

    pub fn stats(&self) -> HistoryStats {
        let mut stats = HistoryStats {
            total_entries: self.entries.len(),
            total_days: self.distinct_days().len(),
            ..Default::default()
        };
        for entry in &self.entries {
            *stats.by_source.entry(entry.source).or_insert(0) += 1;
            if let Some(vibe) = entry.vibe_at_time {
                *stats.by_vibe.entry(vibe).or_insert(0) += 1;
            }
        }
        stats
    }

    fn persist(&self) {
        if let Err(e) = save_blob(self.kv.as_ref(), HISTORY_KEY, &self.entries) {
            warn!("Failed to persist history: {}", e);
        }
    }
}
