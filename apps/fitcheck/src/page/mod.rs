// Page layer
// Implements: the fit panel controller (run / clear) and its output surfaces.
// Résumé text comes from models::resume; scoring comes from engine only.

pub mod panel;
pub mod terminal;

pub use panel::{FitPanel, FitSurface};
pub use terminal::TerminalSurface;
