//! Unified application error type.
//! All modules (store, core, report, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {} (track some hours first)", .0.display())]
    DataFileMissing(PathBuf),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid datetime: '{0}' (expected 'now' or ISO-8601, e.g. 2024-01-10T09:00)")]
    InvalidDate(String),

    #[error("Invalid delimiter: '{0}' (must be a single ASCII character)")]
    InvalidDelimiter(String),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Chart error: {0}")]
    Chart(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Launcher error: {0}")]
    Launcher(String),
}

pub type AppResult<T> = Result<T, AppError>;
