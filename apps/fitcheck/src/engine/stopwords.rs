use crate::models::lexicon::Lexicon;

/// Tokens shorter than this never carry meaning on their own.
pub const MIN_TOKEN_LEN: usize = 3;

/// Returns true if a normalized token is meaningful: at least three characters,
/// not a stopword, not all digits, and not bare hyphens.
pub fn is_content_token(token: &str, lexicon: &Lexicon) -> bool {
    if token.chars().count() < MIN_TOKEN_LEN {
        return false;
    }
    if lexicon.is_stopword(token) {
        return false;
    }
    if !token.chars().any(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    !token.chars().all(|c| c.is_ascii_digit())
}
