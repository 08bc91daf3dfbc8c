mod deck_service;
mod extraction_service;
mod insight_service;
mod summary_service;

pub use deck_service::DeckService;
pub use extraction_service::{ExtractionService, StagedUpload};
pub use insight_service::{parse_insight_reply, InsightService};
pub use summary_service::SummaryService;
