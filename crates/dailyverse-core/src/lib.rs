//! Core types for the daily poem: poems, vibes, analyses, history records

mod analysis;
mod clock;
mod config;
mod error;
mod history;
mod types;
mod vibe;

pub use analysis::{clamp_unit, SentimentScore, VibeAnalysis, COLOR_INTENSITY_FLOOR};
pub use clock::{local_day, Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigError};
pub use error::PoemError;
pub use history::{HistorySource, PoemHistoryEntry, StreakInfo};
pub use types::{NewsItem, Poem, PoemSource};
pub use vibe::{Vibe, VibeProfile};
