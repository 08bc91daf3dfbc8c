mod document_extractor;
mod llm_client;

pub use document_extractor::{DocumentExtractor, ExtractorError};
pub use llm_client::{LlmClient, LlmClientError};
