//! Unified application error type.
//! All modules (ingest, core, render, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    // ---------------------------
    // Decoding errors
    // ---------------------------
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not decode the file: {0}")]
    Decode(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Missing required columns: {}", .0.join(", "))]
    Schema(Vec<String>),

    #[error("Invalid {which} date '{raw}': expected format DD/MM/YYYY HH:MM")]
    InvalidWindow { which: &'static str, raw: String },

    #[error("No valid data after {stage}: {reason}")]
    EmptyResult { stage: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Orchestrator wrapper
    // ---------------------------
    #[error("Error processing the file: {0}")]
    Processing(#[source] Box<AppError>),
}

pub type AppResult<T> = Result<T, AppError>;
