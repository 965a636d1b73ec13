use std::sync::Arc;
use std::time::Duration;

use ai::{
    chat_completions::{ChatCompletion, ChatCompletionMessage, ChatCompletionRequestBuilder},
    clients::openai::Client,
};
use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, prelude::Result};

#[async_trait::async_trait]
pub trait GenerateOps {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl GenerateOps for Arc<Client> {
    /// One logical completion per request. Transient upstream failures get a
    /// bounded retry with backoff; malformed output is not retried here, that
    /// belongs to the JSON repair layer.
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequestBuilder::default()
            .model(&settings.ai_model)
            .messages(vec![ChatCompletionMessage::User(prompt.to_string().into())])
            .build()
            .map_err(|e| StandardError::new("ERR-AI-001").interpolate_err(e.to_string()))?;
        let per_attempt = Duration::from_secs(settings.ai_timeout_secs);
        let mut backoff = Duration::from_millis(500);
        let mut last_failure = String::new();
        for attempt in 1..=settings.ai_max_attempts {
            match tokio::time::timeout(per_attempt, self.chat_completions(&request)).await {
                Ok(Ok(response)) => {
                    return response
                        .choices
                        .first()
                        .and_then(|choice| choice.message.content.clone())
                        .filter(|content| !content.trim().is_empty())
                        .ok_or_else(|| {
                            StandardError::new("ERR-AI-002: model returned an empty completion")
                        });
                }
                Ok(Err(e)) => {
                    last_failure = e.to_string();
                    tracing::warn!("completion attempt {} failed: {}", attempt, &last_failure);
                }
                Err(_) => {
                    last_failure = format!("timed out after {}s", settings.ai_timeout_secs);
                    tracing::warn!("completion attempt {} {}", attempt, &last_failure);
                }
            }
            if attempt < settings.ai_max_attempts {
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
        Err(StandardError::new("ERR-AI-002").interpolate_err(last_failure))
    }
}
