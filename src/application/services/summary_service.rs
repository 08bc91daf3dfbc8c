use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

/// Produces the structured summary: one completion call combining a fixed
/// business-analyst framing, the user's verbatim request, and the verbatim
/// extracted content. The reply is trimmed and passed through unvalidated.
pub struct SummaryService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> SummaryService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, raw_content, user_prompt), fields(content_len = raw_content.len()))]
    pub async fn summarize(
        &self,
        raw_content: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        let prompt = format!(
            "You are a business analyst. Please read the following document content and provide \
             a clean, well-structured summary of its key information, data points, and primary \
             topics. Here is the user's specific request: '{user_prompt}'. \
             Content: `{raw_content}`"
        );

        let reply = self.llm_client.generate(&prompt).await?;
        Ok(reply.trim().to_string())
    }
}
