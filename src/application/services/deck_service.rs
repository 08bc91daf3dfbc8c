use crate::domain::PresentationPayload;

/// Stub presentation builder. Slide synthesis is not implemented; the summary
/// is passed through and the list fields stay empty so the response contract
/// keeps all three keys.
pub struct DeckService;

impl DeckService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, summary: &str) -> PresentationPayload {
        PresentationPayload {
            summary: summary.to_string(),
            highlights: Vec::new(),
            slides: Vec::new(),
        }
    }
}

impl Default for DeckService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_summary_through_with_empty_lists() {
        let payload = DeckService::new().build("Q3 revenue grew 12%.");
        assert_eq!(payload.summary, "Q3 revenue grew 12%.");
        assert!(payload.highlights.is_empty());
        assert!(payload.slides.is_empty());
    }
}
