use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::engine::aliases::AliasTable;
use crate::engine::normalize::normalize;
use crate::errors::AppError;

/// Articles, prepositions and generic posting filler that never count as JD terms.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "into", "is", "it", "its", "of", "on", "or", "our", "out", "such", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "we", "will", "with", "you", "your",
    "ability", "able", "including", "required", "preferred", "responsibilities", "requirements",
    "experience", "knowledge", "skills", "work", "working", "role", "job", "position", "team",
    "must", "may", "can", "ensure", "support", "maintain", "perform", "provide",
];

/// Multi-word concepts that n-gram slicing must not split.
pub const DEFAULT_PHRASES: &[&str] = &[
    "preventive maintenance",
    "preventative maintenance",
    "predictive maintenance",
    "electrical schematics",
    "wiring diagrams",
    "motor control",
    "material handling equipment",
    "conveyor systems",
    "automated conveyor systems",
    "robotic work cells",
    "pneumatic systems",
    "computerized maintenance management system",
    "lockout tagout",
    "fire life safety",
    "root cause analysis",
    "power distribution",
    "variable frequency drive",
];

/// Acronyms and spelling variants treated as the same term.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("preventative maintenance", "preventive maintenance"),
    ("photo eyes", "photo-eyes"),
    ("photo eye", "photo-eye"),
    ("programmable logic controller", "plc"),
    ("computerized maintenance management system", "cmms"),
    ("material handling equipment", "mhe"),
    ("variable frequency drive", "vfd"),
    ("lockout tagout", "loto"),
    ("fire life safety", "fls"),
];

/// The static configuration the engine reads: stopwords, phrase whitelist, aliases.
///
/// Immutable once built. Every entry is stored normalized so the engine never
/// re-normalizes configuration on the hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    phrases: Vec<String>,
    aliases: AliasTable,
}

/// On-disk lexicon override. Missing fields keep the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconFile {
    pub stopwords: Option<Vec<String>>,
    pub phrases: Option<Vec<String>>,
    pub aliases: Option<Vec<(String, String)>>,
}

impl Lexicon {
    pub fn new<S, P, A, X, Y>(stopwords: S, phrases: P, aliases: A) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        A: IntoIterator<Item = (X, Y)>,
        X: AsRef<str>,
        Y: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let phrases = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        Self {
            stopwords,
            phrases,
            aliases: AliasTable::new(aliases),
        }
    }

    /// Parses a JSON lexicon, filling unspecified tables from the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let lexicon = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            stopwords = lexicon.stopwords.len(),
            phrases = lexicon.phrases.len(),
            aliases = lexicon.aliases.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn from_file(file: LexiconFile) -> Self {
        let stopwords: Vec<String> = file
            .stopwords
            .unwrap_or_else(|| DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect());
        let phrases: Vec<String> = file
            .phrases
            .unwrap_or_else(|| DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect());
        let aliases: Vec<(String, String)> = file.aliases.unwrap_or_else(|| {
            DEFAULT_ALIASES
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect()
        });
        Self::new(stopwords, phrases, aliases)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Whitelisted phrases, normalized, in configuration order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_STOPWORDS.iter().copied(),
            DEFAULT_PHRASES.iter().copied(),
            DEFAULT_ALIASES.iter().copied(),
        )
    }
}
