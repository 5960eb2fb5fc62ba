use std::io::Write;

use crate::errors::AppError;
use crate::page::panel::FitSurface;

/// Number of cells in the rendered score bar.
pub const BAR_WIDTH: usize = 20;

/// Renders the fit panel as plain text.
///
/// Surface updates are buffered; the whole panel is written when it becomes
/// visible, so a run prints exactly one block.
pub struct TerminalSurface<W: Write> {
    out: W,
    score: String,
    bar: Option<u32>,
    matches: Vec<String>,
    gaps: Vec<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            score: String::new(),
            bar: None,
            matches: Vec::new(),
            gaps: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", self.score)?;
        if let Some(percent) = self.bar {
            writeln!(self.out, "{}", render_bar(percent))?;
        }
        write_list(&mut self.out, "Matches", &self.matches)?;
        write_list(&mut self.out, "Gaps", &self.gaps)?;
        self.out.flush()
    }
}

impl<W: Write> FitSurface for TerminalSurface<W> {
    fn show_score(&mut self, line: &str) -> Result<(), AppError> {
        self.score = line.to_string();
        Ok(())
    }

    fn show_bar(&mut self, percent: u32) -> Result<(), AppError> {
        self.bar = Some(percent);
        Ok(())
    }

    fn show_matches(&mut self, terms: &[String]) -> Result<(), AppError> {
        self.matches = terms.to_vec();
        Ok(())
    }

    fn show_gaps(&mut self, terms: &[String]) -> Result<(), AppError> {
        self.gaps = terms.to_vec();
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), AppError> {
        if visible {
            self.render()?;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), AppError> {
        self.score.clear();
        self.bar = None;
        self.matches.clear();
        self.gaps.clear();
        Ok(())
    }
}

/// `[##########----------]` for 50.
pub fn render_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn write_list<W: Write>(out: &mut W, title: &str, terms: &[String]) -> std::io::Result<()> {
    writeln!(out, "{title}:")?;
    if terms.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for term in terms {
        writeln!(out, "  - {term}")?;
    }
    Ok(())
}
