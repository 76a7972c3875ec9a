//! Error types shared by the calculator and its entry points

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectorError {
    /// Text that does not name one of the three risk categories
    #[error("invalid risk category: {0:?}")]
    InvalidCategory(String),

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectorError>;
