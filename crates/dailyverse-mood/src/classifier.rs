//! Whole-word keyword classifier over the ten vibe lexicons

use crate::lexicon::{
    ABSTRACT_WORDS, ENERGY_DENSITY_SCALE, ENERGY_WORDS, LONG_WORD_LEN, NEGATIVE_WORDS,
    POSITIVE_WORDS,
};
use dailyverse_core::{SentimentScore, Vibe};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const DEFAULT_MAX_KEYWORDS: usize = 5;

static WORD_RE: OnceLock<Regex> = OnceLock::new();
static VIBE_INDEX: OnceLock<HashMap<&'static str, Vibe>> = OnceLock::new();

/// Lower-cased words of a text. Apostrophes inside a word are kept ("don't").
pub fn tokenize(text: &str) -> Vec<String> {
    let re = WORD_RE.get_or_init(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").unwrap());
    let lower = text.to_lowercase();
    re.find_iter(&lower)
        .map(|m: regex::Match| m.as_str().to_string())
        .collect()
}

fn vibe_index() -> &'static HashMap<&'static str, Vibe> {
    VIBE_INDEX.get_or_init(|| {
        Vibe::ALL
            .iter()
            .flat_map(|&vibe| vibe.lexicon().iter().map(move |&word| (word, vibe)))
            .collect()
    })
}

/// How strong the mood signal was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// No words at all
    NoText,
    /// Words, but no lexicon hits
    NoKeywords,
    /// Several vibes share the top score
    Tie,
    /// One vibe has the top score
    Dominant,
}

/// Result of classifying one corpus
#[derive(Debug, Clone)]
pub struct Classification {
    pub vibe: Vibe,
    pub confidence: f64,
    pub signal: Signal,
    /// Hits per vibe, indexed by `Vibe::index`
    pub scores: [usize; 10],
    pub total_hits: usize,
    pub word_count: usize,
    pub keywords: Vec<String>,
    pub sentiment: SentimentScore,
}

impl Classification {
    pub fn score(&self, vibe: Vibe) -> usize {
        self.scores[vibe.index()]
    }
}

/// Maps free text onto a vibe with whole-word lexicon matching
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    max_keywords: usize,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }

    pub fn with_max_keywords(max_keywords: usize) -> Self {
        Self { max_keywords }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let words = tokenize(text);
        let index = vibe_index();

        let mut scores = [0usize; 10];
        // word -> (count, first position)
        let mut matched: HashMap<&str, (usize, usize)> = HashMap::new();

        for (pos, word) in words.iter().enumerate() {
            if let Some(&vibe) = index.get(word.as_str()) {
                scores[vibe.index()] += 1;
                matched
                    .entry(word.as_str())
                    .and_modify(|(count, _)| *count += 1)
                    .or_insert((1, pos));
            }
        }

        let total_hits: usize = scores.iter().sum();
        let top = scores.iter().copied().max().unwrap_or(0);
        let leaders: Vec<Vibe> = Vibe::ALL
            .iter()
            .copied()
            .filter(|v| top > 0 && scores[v.index()] == top)
            .collect();

        let (vibe, signal) = if words.is_empty() {
            (Vibe::DEFAULT, Signal::NoText)
        } else if top == 0 {
            (Vibe::DEFAULT, Signal::NoKeywords)
        } else if leaders.len() > 1 {
            (Vibe::DEFAULT, Signal::Tie)
        } else {
            (leaders[0], Signal::Dominant)
        };

        let confidence = if total_hits == 0 {
            0.0
        } else {
            top as f64 / total_hits as f64
        };

        let mut ranked: Vec<(&str, (usize, usize))> = matched.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        let keywords = ranked
            .into_iter()
            .take(self.max_keywords)
            .map(|(w, _)| w.to_string())
            .collect();

        Classification {
            vibe,
            confidence,
            signal,
            scores,
            total_hits,
            word_count: words.len(),
            keywords,
            sentiment: measure_sentiment(&words),
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn measure_sentiment(words: &[String]) -> SentimentScore {
    if words.is_empty() {
        return SentimentScore::neutral();
    }

    let positive: HashSet<&str> = POSITIVE_WORDS.iter().copied().collect();
    let negative: HashSet<&str> = NEGATIVE_WORDS.iter().copied().collect();
    let energetic: HashSet<&str> = ENERGY_WORDS.iter().copied().collect();
    let abstract_words: HashSet<&str> = ABSTRACT_WORDS.iter().copied().collect();

    let mut pos_hits = 0usize;
    let mut neg_hits = 0usize;
    let mut energy_hits = 0usize;
    let mut complex_words = 0usize;

    for word in words {
        let w = word.as_str();
        if positive.contains(w) {
            pos_hits += 1;
        }
        if negative.contains(w) {
            neg_hits += 1;
        }
        if energetic.contains(w) {
            energy_hits += 1;
        }
        if w.chars().count() > LONG_WORD_LEN || abstract_words.contains(w) {
            complex_words += 1;
        }
    }

    let total = words.len() as f64;
    let positivity = if pos_hits + neg_hits == 0 {
        0.5
    } else {
        pos_hits as f64 / (pos_hits + neg_hits) as f64
    };
    let energy = energy_hits as f64 / total * ENERGY_DENSITY_SCALE;
    let complexity = complex_words as f64 / total;

    SentimentScore::new(positivity, energy, complexity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let words = tokenize("Hope, at DAWN! Don't stop.");
        assert_eq!(words, vec!["hope", "at", "dawn", "don't", "stop"]);
    }

    #[test]
    fn test_whole_word_matching() {
        let classifier = SentimentClassifier::new();
        // "hopeless" and "crisisline" must not count as "hope"/"crisis"
        let result = classifier.classify("hopeless crisisline");
        assert_eq!(result.total_hits, 0);
        assert_eq!(result.signal, Signal::NoKeywords);
    }

    #[test]
    fn test_dominant_vibe() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("A breakthrough brings hope at dawn after the crisis");
        assert_eq!(result.vibe, Vibe::Hopeful);
        assert_eq!(result.signal, Signal::Dominant);
        assert_eq!(result.score(Vibe::Hopeful), 3);
        assert_eq!(result.score(Vibe::Melancholic), 1);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tie_defaults_to_contemplative() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("hope and grief");
        assert_eq!(result.vibe, Vibe::Contemplative);
        assert_eq!(result.signal, Signal::Tie);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_keywords_defaults_to_contemplative() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("the committee met on tuesday");
        assert_eq!(result.vibe, Vibe::Contemplative);
        assert_eq!(result.confidence, 0.0);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("   ");
        assert_eq!(result.signal, Signal::NoText);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.sentiment, SentimentScore::neutral());
    }

    #[test]
    fn test_keywords_by_frequency_then_first_occurrence() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("dawn hope grief hope dawn hope victory");
        assert_eq!(result.keywords, vec!["hope", "dawn", "grief", "victory"]);
    }

    #[test]
    fn test_keywords_capped() {
        let classifier = SentimentClassifier::with_max_keywords(2);
        let result = classifier.classify("hope dawn cure promise renewal");
        assert_eq!(result.keywords.len(), 2);
        assert_eq!(result.keywords, vec!["hope", "dawn"]);
    }

    #[test]
    fn test_positivity_ratio() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("good good bad");
        assert!((result.sentiment.positivity() - 2.0 / 3.0).abs() < 1e-9);

        let neutral = classifier.classify("the table is wooden");
        assert_eq!(neutral.sentiment.positivity(), 0.5);
    }

    #[test]
    fn test_energy_saturates() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("fast explosive dynamic intense");
        assert_eq!(result.sentiment.energy(), 1.0);

        let calm = classifier.classify("the lake was still");
        assert_eq!(calm.sentiment.energy(), 0.0);
    }

    #[test]
    fn test_complexity_counts_long_and_abstract_words() {
        let classifier = SentimentClassifier::new();
        // "parliamentary" is long, "policy" is abstract, "new" and "the" are neither
        let result = classifier.classify("the new parliamentary policy");
        assert!((result.sentiment.complexity() - 0.5).abs() < 1e-9);
    }
}
