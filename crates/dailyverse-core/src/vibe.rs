//! The ten vibes and their profile table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood category used to condition generation and theme the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Hopeful,
    Contemplative,
    Energetic,
    Peaceful,
    Melancholic,
    Inspiring,
    Uncertain,
    Celebratory,
    Reflective,
    Determined,
}

/// Everything tied to one vibe: lexicon, prompt template, colors
#[derive(Debug)]
pub struct VibeProfile {
    pub vibe: Vibe,
    pub name: &'static str,
    pub description: &'static str,
    /// Lower-case whole words that signal this vibe
    pub lexicon: &'static [&'static str],
    pub prompt: &'static str,
    /// Primary and secondary theme colors as hex strings
    pub colors: (&'static str, &'static str),
}

impl Vibe {
    pub const ALL: [Vibe; 10] = [
        Vibe::Hopeful,
        Vibe::Contemplative,
        Vibe::Energetic,
        Vibe::Peaceful,
        Vibe::Melancholic,
        Vibe::Inspiring,
        Vibe::Uncertain,
        Vibe::Celebratory,
        Vibe::Reflective,
        Vibe::Determined,
    ];

    /// The "no signal" vibe
    pub const DEFAULT: Vibe = Vibe::Contemplative;

    pub fn profile(self) -> &'static VibeProfile {
        match self {
            Vibe::Hopeful => &HOPEFUL,
            Vibe::Contemplative => &CONTEMPLATIVE,
            Vibe::Energetic => &ENERGETIC,
            Vibe::Peaceful => &PEACEFUL,
            Vibe::Melancholic => &MELANCHOLIC,
            Vibe::Inspiring => &INSPIRING,
            Vibe::Uncertain => &UNCERTAIN,
            Vibe::Celebratory => &CELEBRATORY,
            Vibe::Reflective => &REFLECTIVE,
            Vibe::Determined => &DETERMINED,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn lexicon(self) -> &'static [&'static str] {
        self.profile().lexicon
    }

    pub fn prompt_template(self) -> &'static str {
        self.profile().prompt
    }

    pub fn colors(self) -> (&'static str, &'static str) {
        self.profile().colors
    }

    /// Prompt for the generator, optionally seeded with today's keywords
    pub fn build_prompt(self, keywords: &[String]) -> String {
        if keywords.is_empty() {
            self.prompt_template().to_string()
        } else {
            format!(
                "{} Let these themes from today's news color the imagery: {}.",
                self.prompt_template(),
                keywords.join(", ")
            )
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Default for Vibe {
    fn default() -> Self {
        Vibe::DEFAULT
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static HOPEFUL: VibeProfile = VibeProfile {
    vibe: Vibe::Hopeful,
    name: "hopeful",
    description: "Optimism about what comes next",
    lexicon: &[
        "hope", "hopes", "hoping", "breakthrough", "breakthroughs", "dawn", "recovery",
        "recovering", "promise", "promising", "optimism", "optimistic", "improve", "improving",
        "improvement", "cure", "rebound", "renewal", "brighter",
    ],
    prompt: "Write a short hopeful poem about new beginnings and the light that follows darkness.",
    colors: ("#FFD166", "#F4A261"),
};

static CONTEMPLATIVE: VibeProfile = VibeProfile {
    vibe: Vibe::Contemplative,
    name: "contemplative",
    description: "Quiet thought and open questions",
    lexicon: &[
        "consider", "considering", "ponder", "wonder", "wondering", "question", "questions",
        "meaning", "philosophy", "think", "thinking", "thought", "study", "research",
        "examine", "debate",
    ],
    prompt: "Write a short contemplative poem that sits with a quiet question about the world.",
    colors: ("#6C757D", "#ADB5BD"),
};

static ENERGETIC: VibeProfile = VibeProfile {
    vibe: Vibe::Energetic,
    name: "energetic",
    description: "Motion, speed and momentum",
    lexicon: &[
        "surge", "surges", "soar", "soars", "soaring", "rush", "rally", "rallies", "boom",
        "booming", "race", "racing", "launch", "launches", "sprint", "spike", "momentum",
        "accelerate", "accelerating",
    ],
    prompt: "Write a short energetic poem full of motion, rhythm and momentum.",
    colors: ("#EF476F", "#FF9F1C"),
};

static PEACEFUL: VibeProfile = VibeProfile {
    vibe: Vibe::Peaceful,
    name: "peaceful",
    description: "Calm, rest and harmony",
    lexicon: &[
        "peace", "calm", "quiet", "ceasefire", "truce", "harmony", "serene", "gentle", "rest",
        "tranquil", "stillness", "agreement", "reconcile", "reconciliation", "stable",
    ],
    prompt: "Write a short peaceful poem about stillness, rest and gentle harmony.",
    colors: ("#8ECAE6", "#A8DADC"),
};

static MELANCHOLIC: VibeProfile = VibeProfile {
    vibe: Vibe::Melancholic,
    name: "melancholic",
    description: "Loss, grief and sorrow",
    lexicon: &[
        "crisis", "loss", "losses", "grief", "grieving", "mourn", "mourning", "tragedy",
        "tragic", "death", "deaths", "died", "victims", "sorrow", "disaster", "decline",
        "funeral", "lost",
    ],
    prompt: "Write a short melancholic poem that honors loss gently and finds tenderness in grief.",
    colors: ("#457B9D", "#1D3557"),
};

static INSPIRING: VibeProfile = VibeProfile {
    vibe: Vibe::Inspiring,
    name: "inspiring",
    description: "Courage and achievement worth following",
    lexicon: &[
        "inspire", "inspires", "inspiring", "hero", "heroes", "heroic", "courage",
        "courageous", "achievement", "achieve", "achieved", "pioneer", "pioneering",
        "innovation", "discovery", "discovered", "kindness", "volunteers",
    ],
    prompt: "Write a short inspiring poem about courage and ordinary people doing extraordinary things.",
    colors: ("#06D6A0", "#118AB2"),
};

static UNCERTAIN: VibeProfile = VibeProfile {
    vibe: Vibe::Uncertain,
    name: "uncertain",
    description: "Doubt, risk and unclear outcomes",
    lexicon: &[
        "uncertain", "uncertainty", "unclear", "unknown", "doubt", "doubts", "risk", "risks",
        "volatile", "volatility", "unpredictable", "fears", "concern", "concerns", "worry",
        "worries", "tension", "tensions", "maybe",
    ],
    prompt: "Write a short poem about standing at a crossroads, unsure but still moving forward.",
    colors: ("#9D8189", "#B8B8D1"),
};

static CELEBRATORY: VibeProfile = VibeProfile {
    vibe: Vibe::Celebratory,
    name: "celebratory",
    description: "Joy, victory and festivity",
    lexicon: &[
        "celebrate", "celebrates", "celebration", "celebrations", "victory", "win", "wins",
        "won", "champion", "champions", "festival", "party", "joy", "joyful", "record",
        "anniversary", "triumph", "cheers",
    ],
    prompt: "Write a short celebratory poem bursting with joy, music and shared victory.",
    colors: ("#FFB703", "#FB8500"),
};

static REFLECTIVE: VibeProfile = VibeProfile {
    vibe: Vibe::Reflective,
    name: "reflective",
    description: "Looking back and remembering",
    lexicon: &[
        "remember", "remembering", "remembrance", "memory", "memories", "history",
        "historic", "legacy", "reflect", "reflects", "reflection", "looking", "past",
        "tribute", "memorial", "years", "heritage",
    ],
    prompt: "Write a short reflective poem that looks back on the past with clear and gentle eyes.",
    colors: ("#B5838D", "#E5989B"),
};

static DETERMINED: VibeProfile = VibeProfile {
    vibe: Vibe::Determined,
    name: "determined",
    description: "Resolve and perseverance under pressure",
    lexicon: &[
        "determined", "determination", "resolve", "persist", "persevere", "perseverance",
        "fight", "fighting", "struggle", "commit", "committed", "commitment", "push",
        "pushes", "resilience", "resilient", "vow", "vows", "defend",
    ],
    prompt: "Write a short determined poem about resolve, grit and refusing to give up.",
    colors: ("#D62828", "#003049"),
};
