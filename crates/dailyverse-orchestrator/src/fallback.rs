//! Fallback chains as ordered stage lists

use dailyverse_core::HistorySource;
use std::fmt;

/// One way of obtaining a poem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Today's cached poem
    Cache,
    /// Remote poem service
    Network,
    /// Generation from today's news vibe
    Generative,
    /// Bundled poem, cannot fail
    LocalFallback,
}

/// `get_daily_poem`: cache first
pub const DAILY_PLAN: &[Stage] = &[
    Stage::Cache,
    Stage::Network,
    Stage::Generative,
    Stage::LocalFallback,
];

/// `refresh_daily_poem`: never consults the cache
pub const REFRESH_PLAN: &[Stage] = &[Stage::Network, Stage::Generative, Stage::LocalFallback];

impl Stage {
    /// Whether a poem resolved at this stage replaces the cached poem.
    /// The bundled poem is cached too, so it stays today's poem until a refresh.
    pub fn writes_cache(self) -> bool {
        !matches!(self, Stage::Cache)
    }

    /// History source recorded for a poem resolved at this stage
    pub fn history_source(self) -> HistorySource {
        match self {
            Stage::Network => HistorySource::Api,
            Stage::Generative => HistorySource::AiGenerated,
            Stage::Cache | Stage::LocalFallback => HistorySource::Cached,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Cache => "cache",
            Stage::Network => "network",
            Stage::Generative => "ai-fallback",
            Stage::LocalFallback => "local-fallback",
        };
        write!(f, "{}", name)
    }
}
