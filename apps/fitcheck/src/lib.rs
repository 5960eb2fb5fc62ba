//! fitcheck compares a job description against a résumé.
//!
//! Keywords are extracted from the JD as ranked n-grams, matched against the
//! normalized, alias-expanded résumé text, and reported as a fit percentage
//! with matched and missing terms.

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod page;

pub use engine::{extract_keywords, score_fit, EngineConfig, MatchResult, ScoringMode};
pub use errors::AppError;
pub use models::lexicon::Lexicon;
