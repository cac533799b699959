//! Error types for Shakedown
//!
//! The optimization engine itself never fails: normalization, price
//! estimation, catalog lookup and recommendation are total over well-formed
//! input. Errors only come from the boundaries around it (request
//! validation, list import, file and network I/O).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
