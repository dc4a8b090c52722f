use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single chat message as sent to (and returned by) the model backends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Generate a complete (non-streamed) chat reply.
    /// `system` overrides any system prompt the backend was built with.
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
    ) -> Result<String, anyhow::Error>;

    /// Whether the backend answers its liveness check
    async fn health_check(&self) -> Result<bool, anyhow::Error>;
}

/// Prepend the effective system prompt, if any
pub(crate) fn with_system_prompt(
    messages: Vec<Message>,
    system: Option<&str>,
    default_system: Option<&str>,
) -> Vec<Message> {
    match system.or(default_system) {
        Some(sys) if !sys.is_empty() => {
            let mut out = Vec::with_capacity(messages.len() + 1);
            out.push(Message::system(sys));
            out.extend(messages);
            out
        }
        _ => messages,
    }
}

/// Pull a readable message out of an upstream error body
pub(crate) fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            let err = v.get("error")?;
            err.as_str()
                .map(|s| s.to_string())
                .or_else(|| err.get("message").and_then(|m| m.as_str()).map(|s| s.to_string()))
        })
        .unwrap_or_else(|| body.trim().to_string())
}
