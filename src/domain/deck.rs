use serde::{Deserialize, Serialize};

/// Slide-deck contract returned alongside the insights. Slide synthesis is
/// deliberately unimplemented; producers must still honor all three keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationPayload {
    pub summary: String,
    pub highlights: Vec<String>,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
}
