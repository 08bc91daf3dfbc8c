use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{DocumentKind, UploadedDocument};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts PDF text page-by-page with lopdf, concatenated without page
/// separators. Runs on the blocking pool under a timeout; malformed PDFs can
/// otherwise spin the parser.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<String, ExtractorError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            // Pages that fail to decode contribute nothing.
            let page_text = doc.extract_text(&[*page_number]).unwrap_or_default();
            text.push_str(&page_text);
        }

        Ok(text)
    }
}

#[async_trait]
impl DocumentExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, ExtractorError> {
        if document.kind != DocumentKind::Pdf {
            return Err(ExtractorError::UnsupportedKind(
                document.kind.as_extension().to_string(),
            ));
        }

        let owned = data.to_vec();
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| ExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.trim().is_empty() {
            return Err(ExtractorError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
