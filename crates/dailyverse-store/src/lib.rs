//! Persistence for today's poem, favorites and viewing history

mod blob;
mod cache;
mod favorites;
mod history;
mod kv;
mod sqlite;
mod streak;

pub use blob::{load_blob, save_blob};
pub use cache::{CachedPoem, PoemCache, CACHE_KEY};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use history::{HistoryStats, HistoryStore, HISTORY_KEY};
pub use kv::{KeyValueStore, MemoryStore, StoreError};
pub use sqlite::SqliteStore;
pub use streak::compute_streak;
