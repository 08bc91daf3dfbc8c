use serde::{Deserialize, Serialize};

/// Fixed chart palette, deliberately capped at five entries rather than
/// cycling. The upstream prompt asks for the top 3-5 categories but nothing
/// enforces that downstream, so a payload with more than five data points
/// carries uncolored trailing series.
pub const CHART_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

/// Chart-ready structure derived from a structured summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPayload {
    pub labels: Vec<String>,
    pub datasets: Vec<InsightDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightDataset {
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Vec<String>,
}

impl InsightPayload {
    /// Canonical empty payload: the fallback whenever the upstream reply
    /// cannot be parsed.
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            datasets: vec![InsightDataset {
                data: Vec::new(),
                background_color: Vec::new(),
            }],
        }
    }

    /// Builds a payload from parsed labels and values, assigning the first
    /// `min(len(data), 5)` palette colors.
    pub fn from_series(labels: Vec<String>, data: Vec<f64>) -> Self {
        let color_count = data.len().min(CHART_PALETTE.len());
        let background_color = CHART_PALETTE[..color_count]
            .iter()
            .map(|c| (*c).to_string())
            .collect();

        Self {
            labels,
            datasets: vec![InsightDataset {
                data,
                background_color,
            }],
        }
    }
}
