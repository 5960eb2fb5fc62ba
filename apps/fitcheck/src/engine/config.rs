use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TERMS: usize = 40;
pub const DEFAULT_DISPLAY_LIMIT: usize = 14;
pub const DEFAULT_MAX_NGRAM: usize = 4;
pub const DEFAULT_PHRASE_BOOST: f64 = 2.0;

/// How matched terms add up to the fit percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringMode {
    /// Every extracted term counts once.
    #[default]
    Unweighted,
    /// Terms containing a whitelisted phrase weigh `phrase_boost`, others weigh 1.
    Weighted { phrase_boost: f64 },
}

impl ScoringMode {
    pub fn weighted() -> Self {
        ScoringMode::Weighted {
            phrase_boost: DEFAULT_PHRASE_BOOST,
        }
    }

    /// Weight given to a term that carries a whitelisted phrase.
    pub fn phrase_boost(&self) -> f64 {
        match self {
            ScoringMode::Unweighted => 1.0,
            ScoringMode::Weighted { phrase_boost } => *phrase_boost,
        }
    }
}

/// Tunables for extraction and scoring. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cap on the ranked term set.
    pub max_terms: usize,
    /// Cap on each of the displayed match and gap lists.
    pub display_limit: usize,
    /// Longest n-gram window, in words.
    pub max_ngram: usize,
    pub mode: ScoringMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            max_ngram: DEFAULT_MAX_NGRAM,
            mode: ScoringMode::Unweighted,
        }
    }
}
