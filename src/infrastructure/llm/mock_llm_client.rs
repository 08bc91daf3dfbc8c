use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

/// Scripted client for tests: returns queued replies in order, then repeats
/// the last one.
pub struct MockLlmClient {
    replies: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl MockLlmClient {
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            last: Mutex::new("Mock reply".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmClientError> {
        let mut replies = self.replies.lock().unwrap();
        match replies.pop_front() {
            Some(reply) => {
                *self.last.lock().unwrap() = reply.clone();
                Ok(reply)
            }
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }
}
