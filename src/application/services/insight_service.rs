use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::InsightPayload;

/// Shape the model is asked to return for the chart data.
#[derive(Debug, Deserialize)]
struct RawInsight {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    data: Vec<f64>,
}

/// Derives the chart-ready insight payload from a structured summary via a
/// second completion call with a strict-JSON prompt.
///
/// A malformed reply (prose, broken JSON) downgrades to the canonical empty
/// payload instead of an error; only transport failures propagate.
pub struct InsightService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> InsightService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, summary), fields(summary_len = summary.len()))]
    pub async fn derive(&self, summary: &str) -> Result<InsightPayload, LlmClientError> {
        let prompt = format!(
            "Analyze the following business summary. Identify the top 3-5 key categories or \
             segments and estimate their numerical distribution (e.g., sales, budget, market \
             share). Return ONLY a valid JSON object with the following structure: \
             {{ \"labels\": [\"Category 1\", \"Category 2\", ...], \"data\": [value1, value2, ...] }}. \
             Do not include any other text or markdown formatting. Summary: `{summary}`"
        );

        let reply = self.llm_client.generate(&prompt).await?;
        Ok(parse_insight_reply(&reply))
    }
}

/// Strips markdown code fences the model emits despite instructions, then
/// parses the JSON. Anything unparseable yields the empty payload.
pub fn parse_insight_reply(reply: &str) -> InsightPayload {
    let cleaned = reply
        .trim()
        .replace("```json", "")
        .replace("```", "");
    let cleaned = cleaned.trim();

    match serde_json::from_str::<RawInsight>(cleaned) {
        Ok(raw) => InsightPayload::from_series(raw.labels, raw.data),
        Err(e) => {
            tracing::warn!(error = %e, "Insight reply was not valid JSON, returning empty payload");
            InsightPayload::empty()
        }
    }
}
