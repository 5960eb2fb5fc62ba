use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::engine::config::{
    EngineConfig, ScoringMode, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_NGRAM, DEFAULT_MAX_TERMS,
    DEFAULT_PHRASE_BOOST,
};
use crate::models::lexicon::Lexicon;
use crate::models::resume::FIT_SECTION_ID;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_terms: usize,
    pub display_limit: usize,
    pub weighted: bool,
    pub phrase_boost: f64,
    pub lexicon_path: Option<PathBuf>,
    pub exclude_section: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let phrase_boost: f64 = parse_var(&lookup, "FITCHECK_PHRASE_BOOST", DEFAULT_PHRASE_BOOST)?;
        if !phrase_boost.is_finite() || phrase_boost <= 0.0 {
            bail!("FITCHECK_PHRASE_BOOST must be a positive number, got {phrase_boost}");
        }

        Ok(Config {
            max_terms: parse_var(&lookup, "FITCHECK_MAX_TERMS", DEFAULT_MAX_TERMS)?,
            display_limit: parse_var(&lookup, "FITCHECK_DISPLAY_LIMIT", DEFAULT_DISPLAY_LIMIT)?,
            weighted: parse_flag(&lookup, "FITCHECK_WEIGHTED")?,
            phrase_boost,
            lexicon_path: lookup("FITCHECK_LEXICON")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            exclude_section: lookup("FITCHECK_EXCLUDE_SECTION")
                .unwrap_or_else(|| FIT_SECTION_ID.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        let mode = if self.weighted {
            ScoringMode::Weighted {
                phrase_boost: self.phrase_boost,
            }
        } else {
            ScoringMode::Unweighted
        };

        EngineConfig {
            max_terms: self.max_terms,
            display_limit: self.display_limit,
            max_ngram: DEFAULT_MAX_NGRAM,
            mode,
        }
    }

    /// The lexicon file if one is configured, otherwise the built-in tables.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_path(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display())),
            None => Ok(Lexicon::default()),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean (true/false), got '{other}'"),
    }
}
