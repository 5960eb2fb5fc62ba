// Fit check engine
// Implements: normalization, alias expansion, token filtering, keyword extraction,
// term matching, scoring. Pure functions only; configuration is passed in by reference.

pub mod aliases;
pub mod config;
pub mod extractor;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod stopwords;

// Re-export the public API consumed by the page layer and the binary.
pub use aliases::{expand_aliases, AliasTable};
pub use config::{EngineConfig, ScoringMode};
pub use extractor::{extract_candidates, extract_keywords, Candidate, RankedTerm};
pub use matcher::{term_in_text, word_boundary_pattern};
pub use normalize::{normalize, normalize_opt};
pub use scoring::{score_fit, score_fit_opt, MatchResult};
pub use stopwords::is_content_token;
