use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{DocumentKind, UploadedDocument};

use super::markdown_table::render_markdown_table;

/// Loads a CSV (first row as header) and serializes it as a markdown table.
#[derive(Default)]
pub struct CsvAdapter;

impl CsvAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for CsvAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, ExtractorError> {
        if document.kind != DocumentKind::Csv {
            return Err(ExtractorError::UnsupportedKind(
                document.kind.as_extension().to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse CSV: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(ExtractorError::NoTextFound(document.filename.clone()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                ExtractorError::ExtractionFailed(format!("failed to parse CSV record: {e}"))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(columns = headers.len(), rows = rows.len(), "CSV parsed");
        Ok(render_markdown_table(&headers, &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UploadedDocument;

    fn doc(name: &str, kind: DocumentKind) -> UploadedDocument {
        UploadedDocument::new(name.to_string(), kind, 0)
    }

    #[tokio::test]
    async fn csv_becomes_markdown_table() {
        let data = b"Category,Sales\nHardware,1200\nSoftware,3400\nServices,800\n";
        let text = CsvAdapter::new()
            .extract(data, &doc("sales.csv", DocumentKind::Csv))
            .await
            .unwrap();

        assert!(text.contains("| Category | Sales |"));
        assert!(text.contains("| Hardware | 1200 |"));
        assert_eq!(text.lines().count(), 5);
    }

    #[tokio::test]
    async fn invalid_utf8_is_an_extraction_failure() {
        let data = [0x43, 0x2c, 0xff, 0xfe, 0x0a, 0x31, 0x2c, 0x32];
        let result = CsvAdapter::new()
            .extract(&data, &doc("broken.csv", DocumentKind::Csv))
            .await;
        assert!(matches!(result, Err(ExtractorError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn rejects_non_csv_kind() {
        let result = CsvAdapter::new()
            .extract(b"x", &doc("report.pdf", DocumentKind::Pdf))
            .await;
        assert!(matches!(result, Err(ExtractorError::UnsupportedKind(_))));
    }
}
