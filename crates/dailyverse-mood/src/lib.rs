//! Keyword-based mood classification of news text

mod analyzer;
mod classifier;
mod lexicon;

pub use analyzer::VibeAnalyzer;
pub use classifier::{tokenize, Classification, Signal, SentimentClassifier};
