//! History records and streak summary

use crate::clock::local_day;
use crate::types::Poem;
use crate::vibe::Vibe;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a viewed poem was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistorySource {
    Api,
    AiGenerated,
    CustomPrompt,
    /// Served without a live source: today's cached poem or the bundled
    /// local-fallback poem
    Cached,
}

impl fmt::Display for HistorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HistorySource::Api => "api",
            HistorySource::AiGenerated => "ai-generated",
            HistorySource::CustomPrompt => "custom-prompt",
            HistorySource::Cached => "cached",
        };
        write!(f, "{}", name)
    }
}

/// One viewed poem. Owns a snapshot of the poem, so later changes to other
/// copies never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoemHistoryEntry {
    pub id: String,
    pub poem: Poem,
    pub viewed_date: DateTime<Utc>,
    pub source: HistorySource,
    #[serde(default)]
    pub vibe_at_time: Option<Vibe>,
}

impl PoemHistoryEntry {
    pub fn new(
        poem: Poem,
        viewed_date: DateTime<Utc>,
        source: HistorySource,
        vibe_at_time: Option<Vibe>,
    ) -> Self {
        let vibe_at_time = vibe_at_time.or(poem.vibe);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            poem,
            viewed_date,
            source,
            vibe_at_time,
        }
    }

    /// Local calendar day of the view
    pub fn viewed_day(&self) -> NaiveDate {
        local_day(self.viewed_date)
    }
}

/// Streak summary derived from the set of distinct viewing days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current_streak: usize,
    pub longest_streak: usize,
    pub total_days_with_poems: usize,
    pub last_viewed_date: Option<NaiveDate>,
}

impl StreakInfo {
    pub fn empty() -> Self {
        Self::default()
    }
}
