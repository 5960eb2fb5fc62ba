/// Dash variants folded into the ASCII hyphen: non-breaking hyphen, figure dash,
/// en dash, em dash.
const DASH_VARIANTS: &[char] = &['\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}'];

/// Canonicalizes raw text for keyword extraction and matching.
///
/// Lowercases, folds dash variants to `-`, spells `&` as `and`, replaces every
/// character outside `[a-z0-9-]` with a space, then collapses whitespace.
/// Hyphenated compounds such as `photo-eye` survive intact.
///
/// Idempotent: the output only contains characters this function keeps.
pub fn normalize(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len());

    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' | '-' => spaced.push(c),
            '&' => spaced.push_str(" and "),
            c if DASH_VARIANTS.contains(&c) => spaced.push('-'),
            _ => spaced.push(' '),
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Absent input normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    normalize(text.unwrap_or_default())
}
