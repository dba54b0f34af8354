//! Collaborators the orchestrator depends on.
//!
//! Transport, feed parsing and model invocation live behind these traits.
//! Implementations should bound their own calls with a timeout; the
//! orchestrator also applies the configured limits on top.

use async_trait::async_trait;
use dailyverse_core::{NewsItem, Poem, PoemError};

/// A service handing out a random poem
#[async_trait]
pub trait RemotePoemSource: Send + Sync {
    async fn fetch_random(&self) -> Result<Poem, PoemError>;
}

/// Today's news articles
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_today(&self) -> Result<Vec<NewsItem>, PoemError>;
}

/// An opaque text generator that writes a poem for a prompt
#[async_trait]
pub trait GenerativeTextSource: Send + Sync {
    /// Whether generation can run on this device right now
    fn is_available(&self) -> bool;

    async fn generate(&self, prompt: &str) -> Result<Poem, PoemError>;
}

/// Presentation-layer hooks
pub trait PresentationNotifier: Send + Sync {
    /// A new poem should be shown by widgets
    fn widget_refresh(&self, poem: &Poem);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl PresentationNotifier for NoopNotifier {
    fn widget_refresh(&self, _poem: &Poem) {}
}
