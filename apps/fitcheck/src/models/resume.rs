use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Section id the fit checker itself lives under; excluded from résumé text by default.
pub const FIT_SECTION_ID: &str = "fit";

/// One headed block of the résumé document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeSection {
    /// Explicit `{#id}` from the heading, else the slugified heading. Empty for
    /// text before the first heading.
    pub id: String,
    pub heading: String,
    pub body: String,
}

/// The résumé as an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDocument {
    sections: Vec<ResumeSection>,
}

impl ResumeSection {
    fn untitled() -> Self {
        Self {
            id: String::new(),
            heading: String::new(),
            body: String::new(),
        }
    }

    fn from_heading(raw: &str) -> Self {
        let (heading, id) = match split_explicit_id(raw) {
            Some((heading, id)) => (heading.to_string(), id.to_string()),
            None => (raw.to_string(), slugify(raw)),
        };
        Self {
            id,
            heading,
            body: String::new(),
        }
    }

    fn is_blank(&self) -> bool {
        self.heading.trim().is_empty() && self.body.trim().is_empty()
    }

    /// Heading and body as they would read on the page.
    pub fn visible_text(&self) -> String {
        match (self.heading.trim(), self.body.trim()) {
            ("", body) => body.to_string(),
            (heading, "") => heading.to_string(),
            (heading, body) => format!("{heading} {body}"),
        }
    }
}

impl ResumeDocument {
    /// Splits Markdown (or plain text) into sections at ATX headings.
    pub fn from_markdown(text: &str) -> Self {
        let mut sections = Vec::new();
        let mut current = ResumeSection::untitled();

        for line in text.lines() {
            if let Some(heading) = parse_heading(line) {
                let next = ResumeSection::from_heading(heading);
                let finished = std::mem::replace(&mut current, next);
                if !finished.is_blank() {
                    sections.push(finished);
                }
            } else {
                if !current.body.is_empty() {
                    current.body.push('\n');
                }
                current.body.push_str(line);
            }
        }
        if !current.is_blank() {
            sections.push(current);
        }

        Self { sections }
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let document = Self::from_markdown(&text);
        debug!(
            path = %path.display(),
            sections = document.sections.len(),
            "resume loaded"
        );
        Ok(document)
    }

    pub fn sections(&self) -> &[ResumeSection] {
        &self.sections
    }

    /// Concatenated visible text of every section except `exclude_id`.
    pub fn resume_text(&self, exclude_id: &str) -> String {
        self.sections
            .iter()
            .filter(|s| s.id != exclude_id)
            .map(ResumeSection::visible_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Loads a résumé file and returns its text outside `exclude_id`.
///
/// A résumé with nothing left to match against is rejected rather than scored.
pub fn load_resume_text(path: &Path, exclude_id: &str) -> Result<String, AppError> {
    let text = ResumeDocument::from_path(path)?.resume_text(exclude_id);
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{} has no résumé text outside section '{exclude_id}'",
            path.display()
        )));
    }
    Ok(text)
}

/// `## Title` → `Some("Title")`. Requires 1–6 `#` followed by a space or end of line.
fn parse_heading(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim().trim_end_matches('#').trim_end())
}

/// `Fit check {#fit}` → `("Fit check", "fit")`.
fn split_explicit_id(heading: &str) -> Option<(&str, &str)> {
    let inner = heading.strip_suffix('}')?;
    let open = inner.rfind("{#")?;
    let id = inner[open + 2..].trim();
    if id.is_empty() {
        return None;
    }
    Some((inner[..open].trim_end(), id))
}

fn slugify(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for c in heading.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
