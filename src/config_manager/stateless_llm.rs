use serde::{Deserialize, Serialize};

/// Configuration for the language model backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// "ollama_llm" or "openai_compatible_llm"
    #[serde(rename = "llm_provider")]
    #[serde(default = "default_provider")]
    pub llm_provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Ollama only. Passed through verbatim, e.g. "5m" or "-1".
    #[serde(rename = "keep_alive")]
    #[serde(default)]
    pub keep_alive: Option<String>,

    #[serde(rename = "system_prompt")]
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_provider() -> String {
    "ollama_llm".to_string()
}

fn default_model() -> String {
    "deepseek-r1:1.5b".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            llm_api_key: None,
            temperature: None,
            keep_alive: None,
            system_prompt: None,
        }
    }
}
