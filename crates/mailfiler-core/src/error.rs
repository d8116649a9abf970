//! Error types for the core module

use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Seed CSV could not be read or parsed
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Dashboard template file is missing
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(std::path::PathBuf),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::CsvError(e.to_string())
    }
}
