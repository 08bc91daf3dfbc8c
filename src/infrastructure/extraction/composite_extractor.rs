use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{DocumentKind, UploadedDocument};

use super::csv_adapter::CsvAdapter;
use super::pdf_adapter::PdfAdapter;
use super::spreadsheet_adapter::SpreadsheetAdapter;

/// Dispatches extraction to the adapter registered for the document's kind.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentKind, Arc<dyn DocumentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentKind, Arc<dyn DocumentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Registry covering every supported upload kind.
    pub fn with_default_adapters() -> Self {
        let spreadsheet: Arc<dyn DocumentExtractor> = Arc::new(SpreadsheetAdapter::new());
        Self::new(vec![
            (DocumentKind::Pdf, Arc::new(PdfAdapter::new())),
            (DocumentKind::Csv, Arc::new(CsvAdapter::new())),
            (DocumentKind::Xls, Arc::clone(&spreadsheet)),
            (DocumentKind::Xlsx, spreadsheet),
        ])
    }
}

#[async_trait]
impl DocumentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, ExtractorError> {
        let adapter = self.adapters.get(&document.kind).ok_or_else(|| {
            ExtractorError::UnsupportedKind(document.kind.as_extension().to_string())
        })?;

        adapter.extract(data, document).await
    }
}
