/*!
 * Error types for the meterwise application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading a pronunciation lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Error reading the lexicon file
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// The file parsed but produced no usable entries
    #[error("Lexicon source contained no parseable entries: {path}")]
    Empty {
        /// Path or description of the source
        path: String,
    },
}

/// Errors that can occur during scansion analysis
///
/// Analysis itself never fails - every resolution step has a terminal
/// fallback - so this exists for API symmetry and future surface area.
#[derive(Error, Debug)]
pub enum ScansionError {}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from lexicon loading
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Error from scansion analysis
    #[error("Scansion error: {0}")]
    Scansion(#[from] ScansionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
