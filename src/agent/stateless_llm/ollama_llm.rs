use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stateless_llm_interface::{
    upstream_error_message, with_system_prompt, Message, StatelessLLMInterface,
};

/// Ollama LLM implementation, talking to the native `/api/chat` endpoint
pub struct OllamaLLM {
    client: reqwest::Client,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    keep_alive: Option<String>,
    system: Option<String>,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Message,
}

impl OllamaLLM {
    pub fn new(
        client: reqwest::Client,
        model: String,
        base_url: String,
        temperature: Option<f32>,
        keep_alive: Option<String>,
        system: Option<String>,
    ) -> Self {
        info!("Initialized OllamaLLM: model={}, base_url={}", model, base_url);
        Self {
            client,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            temperature,
            keep_alive,
            system,
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for OllamaLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        let request = OllamaChatRequest {
            model: &self.model,
            messages: with_system_prompt(messages, system, self.system.as_deref()),
            stream: false,
            keep_alive: self.keep_alive.as_deref(),
            options: self.temperature.map(|temperature| OllamaOptions { temperature }),
        };

        let url = format!("{}/api/chat", self.base_url);
        debug!("Ollama chat request: model={}, messages={}", self.model, request.messages.len());
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama error {}: {}", status, upstream_error_message(&body));
        }

        let result: OllamaChatResponse = response.json().await?;
        Ok(result.message.content)
    }

    async fn health_check(&self) -> Result<bool, anyhow::Error> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
