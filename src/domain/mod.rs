mod deck;
mod document;
mod insight;

pub use deck::{PresentationPayload, Slide};
pub use document::{sanitize_filename, DocumentId, DocumentKind, UploadedDocument};
pub use insight::{InsightDataset, InsightPayload, CHART_PALETTE};
