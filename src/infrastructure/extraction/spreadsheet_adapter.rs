use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Reader};

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{DocumentKind, UploadedDocument};

use super::markdown_table::render_markdown_table;

/// Loads an Excel workbook (xls or xlsx, sniffed by calamine), takes the
/// first worksheet with its first row as header, and serializes it as a
/// markdown table.
#[derive(Default)]
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, ExtractorError> {
        if !matches!(document.kind, DocumentKind::Xls | DocumentKind::Xlsx) {
            return Err(ExtractorError::UnsupportedKind(
                document.kind.as_extension().to_string(),
            ));
        }

        let cursor = Cursor::new(data.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor).map_err(|e| {
            ExtractorError::ExtractionFailed(format!("failed to open workbook: {e}"))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExtractorError::NoTextFound(document.filename.clone()))?
            .map_err(|e| {
                ExtractorError::ExtractionFailed(format!("failed to read worksheet: {e}"))
            })?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(|cell| cell.to_string()).collect(),
            None => return Err(ExtractorError::NoTextFound(document.filename.clone())),
        };

        let data_rows: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        tracing::debug!(
            columns = headers.len(),
            rows = data_rows.len(),
            "Worksheet parsed"
        );
        Ok(render_markdown_table(&headers, &data_rows))
    }
}
