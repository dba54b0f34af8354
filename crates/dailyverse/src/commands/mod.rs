pub mod analyze;
pub mod favorites;
pub mod history;
pub mod poem;
pub mod version;

use crate::offline::{JsonNewsSource, JsonPoemSource, StderrNotifier, UnavailableGenerator};
use crate::paths::Paths;
use dailyverse_core::Config;
use dailyverse_orchestrator::{Collaborators, PoemOrchestrator, Stores};
use dailyverse_store::{KeyValueStore, SqliteStore};
use std::sync::Arc;

/// Wire the orchestrator to the data directory
pub fn open_orchestrator(paths: &Paths) -> anyhow::Result<PoemOrchestrator> {
    let config = Config::load(&paths.config_file())?;
    let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&paths.store_file())?);

    let collaborators = Collaborators {
        remote: Arc::new(JsonPoemSource::new(paths.poems_file())),
        news: Arc::new(JsonNewsSource::new(paths.news_file())),
        generator: Arc::new(UnavailableGenerator),
        notifier: Arc::new(StderrNotifier),
    };
    let stores = Stores::open(kv, &config);
    Ok(PoemOrchestrator::new(collaborators, stores, config))
}
