use crate::engine::normalize::normalize;

/// Ordered table of interchangeable forms (acronym ↔ expansion, spelling variants).
///
/// Both forms are stored normalized. Pairs whose forms normalize to nothing, or
/// to the same string, are dropped at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    pairs: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(a, b)| (normalize(a.as_ref()), normalize(b.as_ref())))
            .filter(|(a, b)| !a.is_empty() && !b.is_empty() && a != b)
            .collect();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Appends the missing form of every alias pair that has exactly one form present.
///
/// Additive only: existing text is never rewritten. Passes repeat until nothing
/// is appended, so an appended form that introduces another pair's form is
/// also bridged and the result is a fixed point.
pub fn expand_aliases(normalized: &str, aliases: &AliasTable) -> String {
    let mut expanded = normalized.to_string();

    loop {
        let mut appended = false;

        for (a, b) in aliases.pairs() {
            let has_a = expanded.contains(a.as_str());
            let has_b = expanded.contains(b.as_str());

            if has_a && !has_b {
                append_form(&mut expanded, b);
                appended = true;
            } else if has_b && !has_a {
                append_form(&mut expanded, a);
                appended = true;
            }
        }

        if !appended {
            return expanded;
        }
    }
}

fn append_form(text: &mut String, form: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(form);
}
