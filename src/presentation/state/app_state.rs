use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{DeckService, ExtractionService, InsightService, SummaryService};
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub extraction_service: Arc<ExtractionService>,
    pub summary_service: Arc<SummaryService<L>>,
    pub insight_service: Arc<InsightService<L>>,
    pub deck_service: Arc<DeckService>,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            summary_service: Arc::clone(&self.summary_service),
            insight_service: Arc::clone(&self.insight_service),
            deck_service: Arc::clone(&self.deck_service),
            settings: self.settings.clone(),
        }
    }
}
