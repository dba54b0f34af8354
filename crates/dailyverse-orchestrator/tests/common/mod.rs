#![allow(dead_code)]

use async_trait::async_trait;
use dailyverse_core::{Config, NewsItem, Poem, PoemError, PoemSource};
use dailyverse_orchestrator::{
    Collaborators, GenerativeTextSource, NewsSource, PoemOrchestrator, PresentationNotifier,
    RemotePoemSource, Stores,
};
use dailyverse_store::{KeyValueStore, MemoryStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum Behavior {
    Succeed,
    Fail(PoemError),
    /// Fail the first n calls, then succeed
    FailFirst(usize, PoemError),
    Hang,
}

pub struct FakeRemote {
    behavior: Behavior,
    pub calls: AtomicUsize,
}

impl FakeRemote {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemotePoemSource for FakeRemote {
    async fn fetch_random(&self) -> Result<Poem, PoemError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::FailFirst(k, e) if n < *k => Err(e.clone()),
            Behavior::Succeed | Behavior::FailFirst(..) => Ok(Poem::new(
                format!("Remote poem {}", n),
                "from afar\nit arrives",
                Some("Anonymous".to_string()),
                PoemSource::Remote,
            )),
            Behavior::Fail(e) => Err(e.clone()),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

pub struct FakeNews {
    result: Result<Vec<NewsItem>, PoemError>,
}

impl FakeNews {
    pub fn with_items(items: Vec<NewsItem>) -> Arc<Self> {
        Arc::new(Self { result: Ok(items) })
    }

    pub fn failing(err: PoemError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }

    pub fn hopeful() -> Arc<Self> {
        Self::with_items(vec![
            NewsItem::new("Breakthrough in cancer research", "Doctors report new hope"),
            NewsItem::new("Dawn of a recovery", "Optimism returns as markets rebound"),
        ])
    }
}

#[async_trait]
impl NewsSource for FakeNews {
    async fn fetch_today(&self) -> Result<Vec<NewsItem>, PoemError> {
        self.result.clone()
    }
}

pub struct FakeGenerator {
    available: bool,
    behavior: Behavior,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(available: bool, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            available,
            behavior,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Self::new(false, Behavior::Succeed)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeTextSource for FakeGenerator {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, prompt: &str) -> Result<Poem, PoemError> {
        let n = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };
        match &self.behavior {
            Behavior::FailFirst(k, e) if n < *k => Err(e.clone()),
            // Source deliberately wrong: the orchestrator must retag it
            Behavior::Succeed | Behavior::FailFirst(..) => Ok(Poem::new(
                "Generated",
                format!("a poem for\n{}", prompt),
                None,
                PoemSource::Remote,
            )),
            Behavior::Fail(e) => Err(e.clone()),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub refreshed: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.refreshed.lock().unwrap().len()
    }
}

impl PresentationNotifier for RecordingNotifier {
    fn widget_refresh(&self, poem: &Poem) {
        self.refreshed.lock().unwrap().push(poem.id.clone());
    }
}

pub struct Harness {
    pub remote: Arc<FakeRemote>,
    pub news: Arc<FakeNews>,
    pub generator: Arc<FakeGenerator>,
    pub notifier: Arc<RecordingNotifier>,
    pub kv: Arc<dyn KeyValueStore>,
}

impl Harness {
    pub fn new(
        remote: Arc<FakeRemote>,
        news: Arc<FakeNews>,
        generator: Arc<FakeGenerator>,
    ) -> Self {
        Self {
            remote,
            news,
            generator,
            notifier: Arc::new(RecordingNotifier::default()),
            kv: Arc::new(MemoryStore::new()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            remote: self.remote.clone(),
            news: self.news.clone(),
            generator: self.generator.clone(),
            notifier: self.notifier.clone(),
        }
    }

    pub fn orchestrator(&self) -> PoemOrchestrator {
        self.orchestrator_with(Config::default())
    }

    pub fn orchestrator_with(&self, config: Config) -> PoemOrchestrator {
        let stores = Stores::open(self.kv.clone(), &config);
        PoemOrchestrator::new(self.collaborators(), stores, config)
    }
}

pub fn fast_timeouts() -> Config {
    Config {
        fetch_timeout_ms: 20,
        generation_timeout_ms: 20,
        ..Config::default()
    }
}
