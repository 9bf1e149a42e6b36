use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A text-in, text-out language model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible provider (AI21 Studio by default).
pub struct ChatModelService {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl ChatModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(&config.llm_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            timeout: Duration::from_secs(config.llm_timeout_seconds),
        }
    }

    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": self.temperature
        })
    }
}

#[async_trait]
impl LanguageModel for ChatModelService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = self.build_request(prompt);

        log::debug!(
            "Sending {} character prompt to model {}",
            prompt.len(),
            self.model
        );

        let response: Value =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(request)).await??;

        extract_reply(&response)
    }
}

fn extract_reply(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::LlmRequestError("model returned an empty reply".to_string()))
}
