//! Turns a day's news items into a vibe analysis

use crate::classifier::{Classification, SentimentClassifier, Signal};
use chrono::{DateTime, Utc};
use dailyverse_core::{NewsItem, VibeAnalysis};
use tracing::debug;

/// Reads the mood of a set of news items. Never fails: "no strong mood" is a
/// valid answer, reported as a zero-confidence contemplative analysis.
#[derive(Debug, Clone, Default)]
pub struct VibeAnalyzer {
    classifier: SentimentClassifier,
}

impl VibeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: SentimentClassifier) -> Self {
        Self { classifier }
    }

    pub fn analyze(&self, articles: &[NewsItem]) -> VibeAnalysis {
        self.analyze_at(articles, Utc::now())
    }

    pub fn analyze_at(&self, articles: &[NewsItem], now: DateTime<Utc>) -> VibeAnalysis {
        if articles.is_empty() {
            debug!("No articles, returning default vibe");
            return VibeAnalysis::empty(now);
        }

        let corpus = articles
            .iter()
            .map(NewsItem::text)
            .collect::<Vec<_>>()
            .join("\n");
        let result = self.classifier.classify(&corpus);

        debug!(
            "Classified {} articles - vibe={}, hits={}, words={}",
            articles.len(),
            result.vibe,
            result.total_hits,
            result.word_count
        );

        let reasoning = explain(&result, articles.len());
        VibeAnalysis::new(
            result.vibe,
            result.confidence,
            reasoning,
            result.keywords,
            result.sentiment,
            now,
        )
    }
}

fn explain(result: &Classification, article_count: usize) -> String {
    match result.signal {
        Signal::NoText => format!("{} articles had no readable text", article_count),
        Signal::NoKeywords => format!(
            "No strong mood signals across {} articles, settling on a {} mood",
            article_count, result.vibe
        ),
        Signal::Tie => format!(
            "Mixed signals across {} articles ({}), settling on a {} mood",
            article_count,
            result.keywords.join(", "),
            result.vibe
        ),
        Signal::Dominant => format!(
            "Today's news feels {}: {} of {} mood words across {} articles ({})",
            result.vibe,
            result.score(result.vibe),
            result.total_hits,
            article_count,
            result.keywords.join(", ")
        ),
    }
}
