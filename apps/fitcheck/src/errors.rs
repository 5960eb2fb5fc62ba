use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// The scoring engine itself never fails; these variants cover the layers
/// around it (lexicon files, résumé files, output surfaces, configuration).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, logged alongside the error by the binary.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Output(_) => "OUTPUT_ERROR",
            AppError::Lexicon(_) => "LEXICON_ERROR",
        }
    }
}
