use async_trait::async_trait;

use crate::domain::UploadedDocument;

/// Converts one uploaded document's bytes into a textual representation
/// (plain text for PDFs, a markdown table for tabular formats).
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("unsupported document kind: {0}")]
    UnsupportedKind(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
