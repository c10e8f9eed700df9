/*!
 * # docintel - Document Intelligence CLI
 *
 * A Rust library for analyzing text documents from the command line.
 *
 * ## Features
 *
 * - Extract text from .txt and .pdf files
 * - Extractive summarization via word-frequency scoring
 * - Frequency-ranked keyword extraction
 * - Keyword-matched question answering over the analyzed sentences
 * - Persisted light/dark display theme
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `analysis`: The pure text-analysis pipeline:
 *   - `analysis::tokenizer`: Sentence segmentation and word tokenization
 *   - `analysis::frequency`: Stopword-filtered word-frequency model
 *   - `analysis::summarizer`: Extractive summarization
 *   - `analysis::keywords`: Keyword ranking
 *   - `analysis::qa`: Question answering
 * - `extraction`: Text extraction from document files
 * - `file_utils`: File system operations and file-type detection
 * - `app_controller`: Main application controller
 * - `preferences`: Persisted user preferences (display theme)
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod extraction;
pub mod file_utils;
pub mod preferences;

// Re-export main types for easier usage
pub use analysis::{analyze_document, DocumentAnalysis};
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ExtractionError, PreferenceError};
pub use preferences::{PreferenceStore, Theme};
