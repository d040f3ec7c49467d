use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to open workbook {path}: {reason}")]
    MalformedInputFile { path: PathBuf, reason: String },

    #[error("Unrecognized {field} value '{value}'")]
    UnknownVocabularyValue { field: &'static str, value: String },

    #[error("{0}")]
    SchemaMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
