/*!
 * Text extraction from document files.
 *
 * Extraction resolves a file to a single text string before the analysis
 * pipeline runs. Each supported document type has its own extractor behind
 * a common trait, allowing them to be used interchangeably by the
 * controller. A failed extraction aborts the whole analysis; no partial
 * text is produced.
 */

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use log::debug;

use crate::errors::ExtractionError;
use crate::file_utils::{FileManager, FileType};

/// Common trait for all document text extractors
#[async_trait]
pub trait Extractor: Send + Sync + Debug {
    /// Extract the full text of the document at `path`
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Extractor for plain-text documents
#[derive(Debug, Default)]
pub struct TxtExtractor;

#[async_trait]
impl Extractor for TxtExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        debug!("Reading text file: {:?}", path);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExtractionError::ReadFailed(e.to_string()))
    }
}

/// Extractor for PDF documents
///
/// Delegates byte-to-text decoding to the pdf-extract crate; page texts are
/// joined in page order. Decoding is CPU-bound, so it runs on a blocking
/// worker thread.
#[derive(Debug, Default)]
pub struct PdfExtractor;

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        debug!("Decoding PDF file: {:?}", path);
        let path = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path))
            .await
            .map_err(|e| ExtractionError::PdfDecodeFailed(e.to_string()))?
            .map_err(|e| ExtractionError::PdfDecodeFailed(e.to_string()))?;
        Ok(text)
    }
}

/// Get the extractor matching a detected file type
pub fn extractor_for(file_type: &FileType, path: &Path) -> Result<Box<dyn Extractor>, ExtractionError> {
    match file_type {
        FileType::Text => Ok(Box::new(TxtExtractor)),
        FileType::Pdf => Ok(Box::new(PdfExtractor)),
        FileType::Unknown => Err(ExtractionError::UnsupportedFileType(path.to_path_buf())),
    }
}

/// Detect the file type and extract its text
pub async fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let file_type = FileManager::detect_file_type(path)
        .map_err(|e| ExtractionError::ReadFailed(e.to_string()))?;
    let extractor = extractor_for(&file_type, path)?;
    extractor.extract(path).await
}
