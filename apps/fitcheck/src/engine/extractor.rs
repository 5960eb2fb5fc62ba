//! Keyword extractor: turns free JD text into a ranked, de-duplicated term set.
//!
//! Algorithm:
//! 1. Normalize and alias-expand the JD.
//! 2. Phrase-lock whitelisted phrases by joining their words with `_`.
//! 3. Slide 1..=max_ngram word windows over the locked words.
//! 4. Keep grams where at least 60% of the tokens are content tokens; count them.
//! 5. Rank by token count desc, frequency desc, term asc.
//! 6. Greedily select, skipping terms nested in (or containing) a selected term.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::aliases::expand_aliases;
use crate::engine::config::EngineConfig;
use crate::engine::matcher::word_boundary_pattern;
use crate::engine::normalize::normalize;
use crate::engine::stopwords::is_content_token;
use crate::models::lexicon::Lexicon;

/// Joins the words of a locked phrase. `normalize` never emits it.
const JOIN_MARKER: char = '_';

/// Minimum share of content tokens a gram needs, in percent.
const MIN_CONTENT_PERCENT: usize = 60;

/// Terms shorter than this (in characters) are dropped before ranking.
const MIN_TERM_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// An n-gram that survived the content filter, with its JD frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub term: String,
    pub frequency: u32,
    /// Token count after restoring locked phrases.
    pub len: usize,
}

/// A selected JD term, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub frequency: u32,
    pub len: usize,
    /// 1.0, or the configured phrase boost when the term carries a whitelisted phrase.
    pub weight: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the counted candidate pool, sorted in rank order, before nested-phrase
/// suppression and the term cap.
pub fn extract_candidates(
    jd_text: &str,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> Vec<Candidate> {
    let expanded = expand_aliases(&normalize(jd_text), lexicon.aliases());
    if expanded.is_empty() {
        return vec![];
    }

    let locked = lock_phrases(&expanded, lexicon.phrases());
    let words: Vec<&str> = locked.split(' ').filter(|w| !w.is_empty()).collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for n in 1..=config.max_ngram.max(1) {
        for window in words.windows(n) {
            let gram = window.join(" ").replace(JOIN_MARKER, " ");
            if is_content_dominated(&gram, lexicon) {
                *counts.entry(gram).or_insert(0) += 1;
            }
        }
    }

    let mut candidates: Vec<Candidate> = counts
        .into_iter()
        .filter(|(term, _)| term.chars().count() >= MIN_TERM_LEN)
        .map(|(term, frequency)| Candidate {
            len: term.split(' ').count(),
            term,
            frequency,
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.len
            .cmp(&a.len)
            .then_with(|| b.frequency.cmp(&a.frequency))
            .then_with(|| a.term.cmp(&b.term))
    });

    debug!(
        words = words.len(),
        candidates = candidates.len(),
        "JD candidates built"
    );
    candidates
}

/// Extracts the ranked JD term set used for scoring.
///
/// A candidate is skipped when it is a substring of an already-selected term or
/// contains one; the earlier (longer, more frequent) term wins.
pub fn extract_keywords(
    jd_text: &str,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> Vec<RankedTerm> {
    let boost = config.mode.phrase_boost();
    let mut selected: Vec<RankedTerm> = Vec::new();

    for candidate in extract_candidates(jd_text, lexicon, config) {
        if selected.len() >= config.max_terms {
            break;
        }

        let nested = selected.iter().any(|s| {
            s.term.contains(candidate.term.as_str()) || candidate.term.contains(s.term.as_str())
        });
        if nested {
            continue;
        }

        let weight = if carries_phrase(&candidate.term, lexicon) {
            boost
        } else {
            1.0
        };

        selected.push(RankedTerm {
            term: candidate.term,
            frequency: candidate.frequency,
            len: candidate.len,
            weight,
        });
    }

    debug!(selected = selected.len(), "JD terms selected");
    selected
}

/// Replaces the spaces of every present whitelisted phrase with the join marker.
///
/// Longer phrases lock first so "automated conveyor systems" is not pre-empted
/// by "conveyor systems".
fn lock_phrases(text: &str, phrases: &[String]) -> String {
    let mut ordered: Vec<&String> = phrases.iter().filter(|p| p.contains(' ')).collect();
    ordered.sort_by(|a, b| {
        b.split(' ')
            .count()
            .cmp(&a.split(' ').count())
            .then_with(|| b.len().cmp(&a.len()))
    });

    let mut locked = text.to_string();
    for phrase in ordered {
        if locked.contains(phrase.as_str()) {
            let joined = phrase.replace(' ', &JOIN_MARKER.to_string());
            locked = locked.replace(phrase.as_str(), &joined);
        }
    }
    locked
}

/// A gram survives when it has at least one content token and content tokens
/// make up at least `MIN_CONTENT_PERCENT` of it.
fn is_content_dominated(gram: &str, lexicon: &Lexicon) -> bool {
    let tokens: Vec<&str> = gram.split(' ').filter(|t| !t.is_empty()).collect();
    let content = tokens
        .iter()
        .filter(|t| is_content_token(t, lexicon))
        .count();

    content > 0 && content * 100 >= tokens.len() * MIN_CONTENT_PERCENT
}

/// Phrases and terms are both normalized, so multi-word phrases need only a
/// substring test. Single-word phrases still respect word boundaries.
fn carries_phrase(term: &str, lexicon: &Lexicon) -> bool {
    lexicon.phrases().iter().any(|phrase| {
        if phrase.contains(' ') {
            return term.contains(phrase.as_str());
        }
        word_boundary_pattern(phrase)
            .map(|pattern| pattern.is_match(term))
            .unwrap_or(false)
    })
}
