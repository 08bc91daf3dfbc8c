use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::DocumentExtractor;
use crate::domain::UploadedDocument;

/// A document persisted to the request's staging directory.
#[derive(Debug, Clone)]
pub struct StagedUpload {
    pub document: UploadedDocument,
    pub path: PathBuf,
}

/// Turns a batch of staged uploads into one combined textual representation.
///
/// Per-file failures are skipped, not surfaced: a file that cannot be read or
/// parsed contributes nothing and leaves no trace beyond a warn log. An empty
/// combined string therefore means every file failed, and callers must treat
/// it as a parse failure rather than a valid empty document.
pub struct ExtractionService {
    extractor: Arc<dyn DocumentExtractor>,
}

impl ExtractionService {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self { extractor }
    }

    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn extract_all(&self, files: &[StagedUpload]) -> String {
        let mut texts = Vec::with_capacity(files.len());

        for staged in files {
            let data = match tokio::fs::read(&staged.path).await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(
                        filename = %staged.document.filename,
                        error = %e,
                        "Skipping unreadable upload"
                    );
                    continue;
                }
            };

            match self.extractor.extract(&data, &staged.document).await {
                Ok(text) => texts.push(text),
                Err(e) => {
                    tracing::warn!(
                        filename = %staged.document.filename,
                        error = %e,
                        "Skipping document that failed extraction"
                    );
                }
            }
        }

        tracing::debug!(
            extracted = texts.len(),
            skipped = files.len() - texts.len(),
            "Extraction pass complete"
        );

        texts.join("\n\n")
    }
}
