//! Errors surfaced by poem sources and generators

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoemError {
    #[error("No network connection is available")]
    NetworkUnavailable,

    #[error("The poem service returned an invalid response")]
    InvalidResponse,

    #[error("The poem data could not be decoded")]
    DecodingFailed,

    #[error("No poems were found")]
    NoPoems,

    #[error("Too many requests to the poem service")]
    RateLimited,

    #[error("The poem service failed (status {0})")]
    ServerError(u16),

    #[error("On-device poem generation is not available")]
    GenerationUnavailable,

    #[error("Poem generation failed: {0}")]
    GenerationFailed(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl PoemError {
    /// What the user can do about it
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PoemError::NetworkUnavailable => "Check your internet connection and try again.",
            PoemError::InvalidResponse | PoemError::DecodingFailed => {
                "Try again later. If it keeps happening, the poem service may have changed."
            }
            PoemError::NoPoems => "Try refreshing to fetch a different poem.",
            PoemError::RateLimited => "Wait a few minutes before refreshing again.",
            PoemError::ServerError(_) => "The service is having trouble. Try again later.",
            PoemError::GenerationUnavailable => {
                "Generation needs a supported device with the on-device model enabled."
            }
            PoemError::GenerationFailed(_) => "Try again, or use a different prompt.",
            PoemError::Unknown(_) => "Try again. Restart the app if the problem persists.",
        }
    }

    /// Whether the error came from the generative path
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            PoemError::GenerationUnavailable | PoemError::GenerationFailed(_)
        )
    }

    /// Map an HTTP status code from a poem service onto the taxonomy
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(PoemError::NoPoems),
            429 => Some(PoemError::RateLimited),
            400..=499 => Some(PoemError::InvalidResponse),
            _ => Some(PoemError::ServerError(status)),
        }
    }
}

impl From<serde_json::Error> for PoemError {
    fn from(_: serde_json::Error) -> Self {
        PoemError::DecodingFailed
    }
}
