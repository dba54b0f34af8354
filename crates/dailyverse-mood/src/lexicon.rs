//! Word lists for the sentiment measures (separate from the vibe lexicons)

pub(crate) static POSITIVE_WORDS: &[&str] = &[
    "good", "great", "best", "better", "success", "successful", "win", "wins", "won", "hope",
    "happy", "joy", "love", "peace", "progress", "gain", "gains", "growth", "safe", "rescue",
    "rescued", "recovery", "celebrate", "celebration", "breakthrough", "improve", "improved",
    "kindness", "help", "healing", "free", "beautiful", "bright", "thrive", "thriving",
];

pub(crate) static NEGATIVE_WORDS: &[&str] = &[
    "bad", "worse", "worst", "fail", "failed", "failure", "loss", "losses", "death", "deaths",
    "died", "killed", "war", "attack", "crisis", "fear", "fears", "sad", "anger", "angry",
    "violence", "disaster", "collapse", "decline", "poverty", "threat", "threats", "danger",
    "dangerous", "injured", "grief", "tragedy", "hate", "corruption", "scandal",
];

pub(crate) static ENERGY_WORDS: &[&str] = &[
    "fast", "faster", "explosive", "explosion", "dynamic", "intense", "rapid", "rapidly",
    "sudden", "suddenly", "surge", "soar", "rush", "race", "burst", "thrilling", "wild",
    "fierce", "storm", "blazing", "electric", "urgent", "breaking", "frenzy", "skyrocket",
];

/// Abstract or academic vocabulary counted toward complexity regardless of length
pub(crate) static ABSTRACT_WORDS: &[&str] = &[
    "policy", "theory", "concept", "ethics", "paradigm", "nuance", "context", "framework",
    "ideology", "abstract", "systemic", "thesis", "analysis", "economy", "justice", "truth",
    "meaning", "identity", "sovereignty", "doctrine",
];

/// Words longer than this count as complex
pub(crate) const LONG_WORD_LEN: usize = 7;

/// Energy-word density that saturates the energy score (one in ten words)
pub(crate) const ENERGY_DENSITY_SCALE: f64 = 10.0;
