//! The daily poem coordinator

use crate::fallback::{Stage, DAILY_PLAN, REFRESH_PLAN};
use crate::sources::{GenerativeTextSource, NewsSource, PresentationNotifier, RemotePoemSource};
use chrono::NaiveDate;
use dailyverse_core::{
    Clock, Config, HistorySource, Poem, PoemError, PoemHistoryEntry, PoemSource, StreakInfo,
    SystemClock, Vibe, VibeAnalysis,
};
use dailyverse_mood::{SentimentClassifier, VibeAnalyzer};
use dailyverse_store::{FavoritesStore, HistoryStats, HistoryStore, KeyValueStore, PoemCache};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// External providers
#[derive(Clone)]
pub struct Collaborators {
    pub remote: Arc<dyn RemotePoemSource>,
    pub news: Arc<dyn NewsSource>,
    pub generator: Arc<dyn GenerativeTextSource>,
    pub notifier: Arc<dyn PresentationNotifier>,
}

/// The three stores, opened once and handed to the orchestrator
pub struct Stores {
    pub cache: PoemCache,
    pub favorites: FavoritesStore,
    pub history: HistoryStore,
}

impl Stores {
    pub fn open(kv: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self {
            cache: PoemCache::open(kv.clone()),
            favorites: FavoritesStore::open(kv.clone()),
            history: HistoryStore::open(kv, config.history_capacity),
        }
    }
}

/// A poem together with how it was obtained
#[derive(Debug, Clone)]
pub struct Resolution {
    pub poem: Poem,
    pub stage: Stage,
    /// Present when the poem was generated from the news vibe
    pub analysis: Option<VibeAnalysis>,
}

enum Attempt {
    Resolved(Poem, Option<VibeAnalysis>),
    Skipped(&'static str),
    Failed(PoemError),
}

/// Answers "what is today's poem" and the related generation, favorites and
/// history requests. Each store sits behind its own lock; a resolution takes
/// the cache and history locks together before writing either, so an
/// abandoned call never commits half a result.
pub struct PoemOrchestrator {
    remote: Arc<dyn RemotePoemSource>,
    news: Arc<dyn NewsSource>,
    generator: Arc<dyn GenerativeTextSource>,
    notifier: Arc<dyn PresentationNotifier>,
    analyzer: VibeAnalyzer,
    cache: Mutex<PoemCache>,
    favorites: Mutex<FavoritesStore>,
    history: Mutex<HistoryStore>,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl PoemOrchestrator {
    pub fn new(collaborators: Collaborators, stores: Stores, config: Config) -> Self {
        let analyzer = VibeAnalyzer::with_classifier(SentimentClassifier::with_max_keywords(
            config.max_keywords,
        ));
        Self {
            remote: collaborators.remote,
            news: collaborators.news,
            generator: collaborators.generator,
            notifier: collaborators.notifier,
            analyzer,
            cache: Mutex::new(stores.cache),
            favorites: Mutex::new(stores.favorites),
            history: Mutex::new(stores.history),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Today's poem. Served from the cache when it was cached today; never fails.
    pub async fn get_daily_poem(&self) -> Poem {
        self.resolve(DAILY_PLAN).await.poem
    }

    /// A fresh poem, skipping the cache; never fails.
    pub async fn refresh_daily_poem(&self) -> Poem {
        self.resolve(REFRESH_PLAN).await.poem
    }

    /// Run the stages in order until one yields a poem
    pub async fn resolve(&self, plan: &[Stage]) -> Resolution {
        for &stage in plan {
            match self.attempt(stage).await {
                Attempt::Resolved(poem, analysis) => {
                    info!("Resolved poem '{}' via {}", poem.title, stage);
                    let vibe = analysis.as_ref().map(|a| a.vibe);
                    self.commit(&poem, stage.writes_cache(), stage.history_source(), vibe).await;
                    return Resolution {
                        poem,
                        stage,
                        analysis,
                    };
                }
                Attempt::Skipped(reason) => debug!("Skipping {} stage: {}", stage, reason),
                Attempt::Failed(e) => warn!("{} stage failed, falling back: {}", stage, e),
            }
        }

        // Only reachable for a plan without a local stage
        let poem = Poem::local_fallback();
        self.commit(&poem, true, HistorySource::Cached, None).await;
        Resolution {
            poem,
            stage: Stage::LocalFallback,
            analysis: None,
        }
    }

    async fn attempt(&self, stage: Stage) -> Attempt {
        match stage {
            Stage::Cache => {
                let today = self.clock.today();
                let cache = self.cache.lock().await;
                match cache.get_for_day(today) {
                    Some(poem) => Attempt::Resolved(poem.clone(), None),
                    None => Attempt::Skipped("no poem cached today"),
                }
            }
            Stage::Network => match self.fetch_remote().await {
                Ok(poem) => Attempt::Resolved(poem, None),
                Err(e) => Attempt::Failed(e),
            },
            Stage::Generative => {
                if !self.config.ai_fallback_enabled {
                    return Attempt::Skipped("AI fallback disabled");
                }
                if !self.generator.is_available() {
                    return Attempt::Skipped("generator unavailable");
                }
                let analysis = self.analyze_news_or_default().await;
                match self.generate(&analysis.prompt()).await {
                    Ok(poem) => Attempt::Resolved(poem.with_vibe(analysis.vibe), Some(analysis)),
                    Err(e) => Attempt::Failed(e),
                }
            }
            Stage::LocalFallback => Attempt::Resolved(Poem::local_fallback(), None),
        }
    }

    /// Generate a poem from today's news vibe. Errors are returned as-is.
    pub async fn generate_vibe_based_poem(&self) -> Result<Poem, PoemError> {
        if !self.generator.is_available() {
            return Err(PoemError::GenerationUnavailable);
        }
        let analysis = self.analyze_news_or_default().await;
        let poem = self
            .generate(&analysis.prompt())
            .await?
            .with_vibe(analysis.vibe);

        info!("Generated {} poem '{}'", analysis.vibe, poem.title);
        self.commit(&poem, true, HistorySource::AiGenerated, Some(analysis.vibe)).await;
        self.notifier.widget_refresh(&poem);
        Ok(poem)
    }

    /// Generate a poem from the caller's prompt. Errors are returned as-is.
    pub async fn generate_custom_poem(&self, prompt: &str) -> Result<Poem, PoemError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PoemError::GenerationFailed("prompt is empty".to_string()));
        }
        if !self.generator.is_available() {
            return Err(PoemError::GenerationUnavailable);
        }
        let poem = self.generate(prompt).await?;

        info!("Generated custom poem '{}'", poem.title);
        self.commit(&poem, true, HistorySource::CustomPrompt, None).await;
        self.notifier.widget_refresh(&poem);
        Ok(poem)
    }

    /// Read the mood of today's news. Fetch errors are returned as-is.
    pub async fn analyze_current_vibe(&self) -> Result<VibeAnalysis, PoemError> {
        let articles = bounded(
            self.config.fetch_timeout(),
            self.news.fetch_today(),
            || PoemError::NetworkUnavailable,
        )
        .await?;
        Ok(self.analyzer.analyze_at(&articles, self.clock.now()))
    }

    async fn analyze_news_or_default(&self) -> VibeAnalysis {
        match self.analyze_current_vibe().await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("News unavailable, using default vibe: {}", e);
                VibeAnalysis::empty(self.clock.now())
            }
        }
    }

    async fn fetch_remote(&self) -> Result<Poem, PoemError> {
        let poem = bounded(
            self.config.fetch_timeout(),
            self.remote.fetch_random(),
            || PoemError::NetworkUnavailable,
        )
        .await?;
        Ok(poem.with_source(PoemSource::Remote))
    }

    async fn generate(&self, prompt: &str) -> Result<Poem, PoemError> {
        let limit = self.config.generation_timeout();
        let poem = bounded(limit, self.generator.generate(prompt), || {
            PoemError::GenerationFailed(format!("timed out after {}ms", limit.as_millis()))
        })
        .await?;
        Ok(poem.with_source(PoemSource::AiGenerated))
    }

    async fn commit(
        &self,
        poem: &Poem,
        write_cache: bool,
        source: HistorySource,
        vibe: Option<Vibe>,
    ) {
        let now = self.clock.now();
        let mut cache = self.cache.lock().await;
        let mut history = self.history.lock().await;
        if write_cache {
            cache.store(poem.clone(), now);
        }
        history.record(poem.clone(), source, vibe, now);
    }

    // Favorites

    /// Returns whether the poem is a favorite afterwards
    pub async fn toggle_favorite(&self, poem: &Poem) -> bool {
        self.favorites.lock().await.toggle(poem)
    }

    pub async fn get_favorites(&self) -> Vec<Poem> {
        self.favorites.lock().await.list().to_vec()
    }

    pub async fn is_favorite(&self, poem: &Poem) -> bool {
        self.favorites.lock().await.is_favorite(&poem.id)
    }

    // History

    pub async fn get_history(&self) -> Vec<PoemHistoryEntry> {
        self.history.lock().await.entries().to_vec()
    }

    pub async fn get_history_grouped_by_date(&self) -> Vec<(NaiveDate, Vec<PoemHistoryEntry>)> {
        self.history.lock().await.grouped_by_date()
    }

    pub async fn get_streak_info(&self) -> StreakInfo {
        let today = self.clock.today();
        self.history.lock().await.streak_info(today)
    }

    pub async fn history_stats(&self) -> HistoryStats {
        self.history.lock().await.stats()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    pub async fn delete_entry(&self, entry: &PoemHistoryEntry) -> bool {
        self.history.lock().await.delete(&entry.id)
    }
}

async fn bounded<T, F>(
    limit: Duration,
    fut: F,
    on_timeout: impl FnOnce() -> PoemError,
) -> Result<T, PoemError>
where
    F: Future<Output = Result<T, PoemError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout()),
    }
}
