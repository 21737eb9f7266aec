//! Error types for the input, loading and export layers
//!
//! The calculation core never fails: invalid loan terms produce zero results.
//! Errors only arise where text or files cross into the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
