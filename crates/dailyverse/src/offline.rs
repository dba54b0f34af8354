//! Collaborators backed by files in the data directory.
//!
//! A missing file reads as an unreachable service so the orchestrator falls
//! back exactly as it would without a network.

use async_trait::async_trait;
use chrono::Datelike;
use dailyverse_core::{Clock, NewsItem, Poem, PoemError, PoemSource, SystemClock};
use dailyverse_orchestrator::{
    GenerativeTextSource, NewsSource, PresentationNotifier, RemotePoemSource,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PoemRecord {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    author: Option<String>,
    lines: Vec<String>,
}

impl PoemRecord {
    fn into_poem(self) -> Poem {
        let id = self
            .id
            .unwrap_or_else(|| offline_id(&self.title, self.author.as_deref()));
        Poem::with_id(
            id,
            self.title,
            self.lines.join("\n"),
            self.author,
            PoemSource::Remote,
        )
    }
}

/// Stable id so favorites and the cache recognize the same poem across runs
fn offline_id(title: &str, author: Option<&str>) -> String {
    let raw = format!("{} {}", author.unwrap_or(""), title).to_lowercase();
    let slug = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("offline-{}", slug)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PoemError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found", path.display());
            return Err(PoemError::NetworkUnavailable);
        }
        Err(e) => return Err(PoemError::Unknown(e.to_string())),
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Picks one poem per calendar day from a JSON array of
/// `{"title", "author", "lines"}` records
pub struct JsonPoemSource {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl JsonPoemSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl RemotePoemSource for JsonPoemSource {
    async fn fetch_random(&self) -> Result<Poem, PoemError> {
        let mut records: Vec<PoemRecord> = read_json(&self.path)?;
        if records.is_empty() {
            return Err(PoemError::NoPoems);
        }
        let index = self.clock.today().ordinal0() as usize % records.len();
        Ok(records.swap_remove(index).into_poem())
    }
}

/// Reads today's articles from a JSON array of news items
pub struct JsonNewsSource {
    path: PathBuf,
}

impl JsonNewsSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl NewsSource for JsonNewsSource {
    async fn fetch_today(&self) -> Result<Vec<NewsItem>, PoemError> {
        read_json(&self.path)
    }
}

/// No on-device model in the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGenerator;

#[async_trait]
impl GenerativeTextSource for UnavailableGenerator {
    fn is_available(&self) -> bool {
        false
    }

    async fn generate(&self, _prompt: &str) -> Result<Poem, PoemError> {
        Err(PoemError::GenerationUnavailable)
    }
}

/// Reports widget refreshes on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl PresentationNotifier for StderrNotifier {
    fn widget_refresh(&self, poem: &Poem) {
        eprintln!("widget refresh: {}", poem.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dailyverse_core::FixedClock;
    use tempfile::TempDir;

    fn write_poems(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("poems.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    const POEMS: &str = r#"[
        {"title": "Ozymandias", "author": "Percy Bysshe Shelley", "lines": ["I met a traveller", "from an antique land"]},
        {"title": "The Tyger", "author": "William Blake", "lines": ["Tyger Tyger, burning bright"]},
        {"id": "custom-id", "title": "Untitled", "lines": ["a", "b", "c"]}
    ]"#;

    fn clock_on(month: u32, day: u32) -> Arc<dyn Clock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap()))
    }

    #[tokio::test]
    async fn test_same_day_same_poem() {
        let temp = TempDir::new().unwrap();
        let source = JsonPoemSource::new(write_poems(&temp, POEMS)).with_clock(clock_on(5, 1));

        let a = source.fetch_random().await.unwrap();
        let b = source.fetch_random().await.unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.source, PoemSource::Remote);
    }

    #[tokio::test]
    async fn test_consecutive_days_rotate() {
        let temp = TempDir::new().unwrap();
        let path = write_poems(&temp, POEMS);

        let a = JsonPoemSource::new(path.clone())
            .with_clock(clock_on(5, 1))
            .fetch_random()
            .await
            .unwrap();
        let b = JsonPoemSource::new(path)
            .with_clock(clock_on(5, 2))
            .fetch_random()
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_record_fields() {
        let temp = TempDir::new().unwrap();
        let json = r#"[{"title": "Ozymandias", "author": "Percy Bysshe Shelley", "lines": ["I met a traveller", "from an antique land"]}]"#;
        let poem = JsonPoemSource::new(write_poems(&temp, json))
            .fetch_random()
            .await
            .unwrap();

        assert_eq!(poem.id, "offline-percy-bysshe-shelley-ozymandias");
        assert_eq!(poem.author.as_deref(), Some("Percy Bysshe Shelley"));
        assert_eq!(poem.line_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let source = JsonPoemSource::new(temp.path().join("absent.json"));
        assert_eq!(
            source.fetch_random().await.unwrap_err(),
            PoemError::NetworkUnavailable
        );
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let temp = TempDir::new().unwrap();
        let source = JsonPoemSource::new(write_poems(&temp, "[]"));
        assert_eq!(source.fetch_random().await.unwrap_err(), PoemError::NoPoems);
    }

    #[tokio::test]
    async fn test_malformed_collection() {
        let temp = TempDir::new().unwrap();
        let source = JsonPoemSource::new(write_poems(&temp, "{not json"));
        assert_eq!(
            source.fetch_random().await.unwrap_err(),
            PoemError::DecodingFailed
        );
    }

    #[tokio::test]
    async fn test_news_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("news.json");
        std::fs::write(
            &path,
            r#"[{"title": "Festival draws crowds", "description": "A joyful weekend"}, {"title": "Quiet day"}]"#,
        )
        .unwrap();

        let items = JsonNewsSource::new(path).fetch_today().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "");
    }

    #[tokio::test]
    async fn test_generator_unavailable() {
        let generator = UnavailableGenerator;
        assert!(!generator.is_available());
        assert_eq!(
            generator.generate("anything").await.unwrap_err(),
            PoemError::GenerationUnavailable
        );
    }
}
