//! Fit panel: the run/clear controller between a JD input, the scorer and the
//! output surfaces.
//!
//! The panel owns no scoring logic. `run` calls `engine::score_fit` and renders
//! the result; each run overwrites the previous output.

use std::sync::Arc;

use tracing::info;

use crate::engine::{score_fit, EngineConfig, MatchResult};
use crate::errors::AppError;
use crate::models::lexicon::Lexicon;

/// The output collaborators a fit panel renders into.
///
/// Implement this to swap the display (terminal, test recorder, ...) without
/// touching the panel or the engine.
pub trait FitSurface {
    /// Score display, e.g. `"Fit score: 72% (from 28 JD terms)"`.
    fn show_score(&mut self, line: &str) -> Result<(), AppError>;
    /// Visual bar whose fill is proportional to `percent`.
    fn show_bar(&mut self, percent: u32) -> Result<(), AppError>;
    /// Replaces the rendered match list.
    fn show_matches(&mut self, terms: &[String]) -> Result<(), AppError>;
    /// Replaces the rendered gap list.
    fn show_gaps(&mut self, terms: &[String]) -> Result<(), AppError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), AppError>;
    /// Clears score, bar and both lists.
    fn reset(&mut self) -> Result<(), AppError>;
}

pub struct FitPanel<S: FitSurface> {
    surface: S,
    resume_text: String,
    lexicon: Arc<Lexicon>,
    config: EngineConfig,
    jd_input: String,
    last_result: Option<MatchResult>,
}

impl<S: FitSurface> FitPanel<S> {
    pub fn new(
        surface: S,
        resume_text: impl Into<String>,
        lexicon: Arc<Lexicon>,
        config: EngineConfig,
    ) -> Self {
        Self {
            surface,
            resume_text: resume_text.into(),
            lexicon,
            config,
            jd_input: String::new(),
            last_result: None,
        }
    }

    pub fn jd(&self) -> &str {
        &self.jd_input
    }

    pub fn set_jd(&mut self, text: impl Into<String>) {
        self.jd_input = text.into();
    }

    /// Appends one line of JD text to the input.
    pub fn push_jd_line(&mut self, line: &str) {
        if !self.jd_input.is_empty() {
            self.jd_input.push('\n');
        }
        self.jd_input.push_str(line);
    }

    /// Scores the current JD input and renders the result.
    pub fn run(&mut self) -> Result<&MatchResult, AppError> {
        let result = score_fit(&self.resume_text, &self.jd_input, &self.lexicon, &self.config);
        info!(
            percent = result.percent,
            extracted = result.extracted_count,
            "fit check run"
        );

        self.surface.show_score(&result.score_line())?;
        self.surface.show_bar(result.percent)?;
        self.surface.show_matches(&result.matches)?;
        self.surface.show_gaps(&result.gaps)?;
        self.surface.set_visible(true)?;

        Ok(self.last_result.insert(result))
    }

    /// Empties the JD input, clears every output surface and hides the results.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.jd_input.clear();
        self.last_result = None;
        self.surface.set_visible(false)?;
        self.surface.reset()
    }

    pub fn last_result(&self) -> Option<&MatchResult> {
        self.last_result.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
