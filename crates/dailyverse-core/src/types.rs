//! Poem and news item types

use crate::vibe::Vibe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Where a poem came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoemSource {
    Remote,
    AiGenerated,
    LocalFallback,
}

impl fmt::Display for PoemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoemSource::Remote => "remote",
            PoemSource::AiGenerated => "ai-generated",
            PoemSource::LocalFallback => "local-fallback",
        };
        write!(f, "{}", name)
    }
}

/// An immutable poem value.
///
/// Identity is the `id`: two poems with identical text but different ids are
/// different poems, and `PartialEq`/`Hash` only look at the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poem {
    pub id: String,
    pub title: String,
    /// Body lines joined with `\n`
    pub content: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub vibe: Option<Vibe>,
    pub source: PoemSource,
}

impl Poem {
    /// Create a poem with a fresh id
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<String>,
        source: PoemSource,
    ) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), title, content, author, source)
    }

    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<String>,
        source: PoemSource,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author: normalize_author(author),
            vibe: None,
            source,
        }
    }

    /// Create a poem from individual lines, joined with newlines
    pub fn from_lines<S: AsRef<str>>(
        title: impl Into<String>,
        lines: &[S],
        author: Option<String>,
        source: PoemSource,
    ) -> Self {
        let content = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(title, content, author, source)
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = Some(vibe);
        self
    }

    pub fn with_source(mut self, source: PoemSource) -> Self {
        self.source = source;
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// The statically bundled poem returned when every live source fails
    pub fn local_fallback() -> Self {
        Self::with_id(
            LOCAL_FALLBACK_ID,
            "Hope is the thing with feathers",
            [
                "Hope is the thing with feathers",
                "That perches in the soul,",
                "And sings the tune without the words,",
                "And never stops at all,",
            ]
            .join("\n"),
            Some("Emily Dickinson".to_string()),
            PoemSource::LocalFallback,
        )
        .with_vibe(Vibe::Hopeful)
    }

    pub fn is_local_fallback(&self) -> bool {
        self.source == PoemSource::LocalFallback
    }
}

const LOCAL_FALLBACK_ID: &str = "local-fallback-hope-is-the-thing-with-feathers";

impl PartialEq for Poem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Poem {}

impl Hash for Poem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn normalize_author(author: Option<String>) -> Option<String> {
    author
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let author: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_author(author))
}

/// A news article consumed by the vibe analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source_name: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: String::new(),
            published_at: None,
            source_name: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Title, description and body joined for text analysis
    pub fn text(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.body.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}
