/*!
 * Error types for the docintel application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The file is not a recognized document type
    #[error("Unsupported file type: {0:?}. Please select a .txt or .pdf file")]
    UnsupportedFileType(PathBuf),

    /// The file could not be read
    #[error("Failed to read file: {0}")]
    ReadFailed(String),

    /// The PDF decoder could not reconstruct text from the file
    #[error("Failed to decode PDF: {0}")]
    PdfDecodeFailed(String),
}

/// Errors that can occur in the preference store
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The preference database could not be opened
    #[error("Failed to open preference store: {0}")]
    OpenFailed(String),

    /// A read or write against the store failed
    #[error("Preference query failed: {0}")]
    QueryFailed(String),

    /// A stored value could not be interpreted
    #[error("Invalid preference value: {0}")]
    InvalidValue(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from text extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from the preference store
    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

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
