//! Daily poem acquisition: cache, remote fetch, news-vibe generation, local fallback

mod fallback;
mod orchestrator;
mod sources;

pub use fallback::{Stage, DAILY_PLAN, REFRESH_PLAN};
pub use orchestrator::{Collaborators, PoemOrchestrator, Resolution, Stores};
pub use sources::{
    GenerativeTextSource, NewsSource, NoopNotifier, PresentationNotifier, RemotePoemSource,
};
