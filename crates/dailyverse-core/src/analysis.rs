//! Sentiment scores and vibe analysis results

use crate::vibe::Vibe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest color intensity handed to the UI
pub const COLOR_INTENSITY_FLOOR: f64 = 0.3;

/// Clamp into [0, 1], mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Three independent [0, 1] measures of a text corpus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSentimentScore")]
pub struct SentimentScore {
    positivity: f64,
    energy: f64,
    complexity: f64,
}

impl SentimentScore {
    pub fn new(positivity: f64, energy: f64, complexity: f64) -> Self {
        Self {
            positivity: clamp_unit(positivity),
            energy: clamp_unit(energy),
            complexity: clamp_unit(complexity),
        }
    }

    /// Neutral positivity, no energy, no complexity
    pub fn neutral() -> Self {
        Self::new(0.5, 0.0, 0.0)
    }

    pub fn positivity(&self) -> f64 {
        self.positivity
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    /// UI color intensity: grows with distance from neutral, floored for legibility
    pub fn color_intensity(&self) -> f64 {
        let raw = 0.5 + (self.positivity - 0.5).abs() + (self.energy - 0.5) * 0.3;
        raw.clamp(COLOR_INTENSITY_FLOOR, 1.0)
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

// Decoded blobs go through `new` so the clamp holds for stored values too
#[derive(Deserialize)]
struct RawSentimentScore {
    positivity: f64,
    energy: f64,
    complexity: f64,
}

impl From<RawSentimentScore> for SentimentScore {
    fn from(raw: RawSentimentScore) -> Self {
        Self::new(raw.positivity, raw.energy, raw.complexity)
    }
}

/// The result of reading the mood of a set of news items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawVibeAnalysis")]
pub struct VibeAnalysis {
    pub vibe: Vibe,
    confidence: f64,
    pub reasoning: String,
    pub keywords: Vec<String>,
    pub sentiment: SentimentScore,
    pub analysis_date: DateTime<Utc>,
    color_intensity: f64,
}

impl VibeAnalysis {
    pub fn new(
        vibe: Vibe,
        confidence: f64,
        reasoning: impl Into<String>,
        keywords: Vec<String>,
        sentiment: SentimentScore,
        analysis_date: DateTime<Utc>,
    ) -> Self {
        Self {
            vibe,
            confidence: clamp_unit(confidence),
            reasoning: reasoning.into(),
            keywords,
            color_intensity: sentiment.color_intensity(),
            sentiment,
            analysis_date,
        }
    }

    /// Zero-confidence default analysis for an empty article set
    pub fn empty(analysis_date: DateTime<Utc>) -> Self {
        Self::new(
            Vibe::DEFAULT,
            0.0,
            "No articles to analyze",
            Vec::new(),
            SentimentScore::neutral(),
            analysis_date,
        )
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn color_intensity(&self) -> f64 {
        self.color_intensity
    }

    pub fn has_signal(&self) -> bool {
        self.confidence > 0.0
    }

    /// Generator prompt for this analysis
    pub fn prompt(&self) -> String {
        self.vibe.build_prompt(&self.keywords)
    }
}

/// Stored color intensity is ignored and recomputed from the sentiment
#[derive(Deserialize)]
struct RawVibeAnalysis {
    vibe: Vibe,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    sentiment: SentimentScore,
    analysis_date: DateTime<Utc>,
}

impl From<RawVibeAnalysis> for VibeAnalysis {
    fn from(raw: RawVibeAnalysis) -> Self {
        Self::new(
            raw.vibe,
            raw.confidence,
            raw.reasoning,
            raw.keywords,
            raw.sentiment,
            raw.analysis_date,
        )
    }
}
