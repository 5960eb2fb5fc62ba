use regex::Regex;
use tracing::warn;

use crate::engine::normalize::normalize;

/// Builds a regex matching `term` literally between word boundaries.
///
/// This is the only place a pattern is built from a term string. Every regex
/// metacharacter in `term` is escaped, so any input yields a literal match.
/// An edge that is not a word character (`pre-`) is bounded by whitespace or
/// the ends of the text, since `\b` can never match there.
pub fn word_boundary_pattern(term: &str) -> Result<Regex, regex::Error> {
    let left = if term.starts_with(is_word_char) { r"\b" } else { r"(?:^|\s)" };
    let right = if term.ends_with(is_word_char) { r"\b" } else { r"(?:\s|$)" };
    Regex::new(&format!("{left}{}{right}", regex::escape(term)))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `term` occurs in an already-normalized target text.
///
/// Multi-word phrases use substring containment. Single tokens must sit on
/// word boundaries, so `plc` does not match inside `place`.
pub fn term_in_text(term: &str, normalized_target: &str) -> bool {
    let term = normalize(term);
    if term.is_empty() {
        return false;
    }

    if term.contains(' ') {
        return normalized_target.contains(term.as_str());
    }

    match word_boundary_pattern(&term) {
        Ok(pattern) => pattern.is_match(normalized_target),
        Err(e) => {
            warn!("Could not build word-boundary pattern for '{term}': {e}");
            false
        }
    }
}
