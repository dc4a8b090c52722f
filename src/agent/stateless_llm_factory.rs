use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::agent::stateless_llm::ollama_llm::OllamaLLM;
use crate::config_manager::LLMConfig;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - LLM section of the application config
    /// * `client` - Shared HTTP client
    pub fn create_llm(
        config: &LLMConfig,
        client: reqwest::Client,
    ) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.llm_provider);

        match config.llm_provider.as_str() {
            "ollama_llm" => Ok(Arc::new(OllamaLLM::new(
                client,
                config.model.clone(),
                config.base_url.clone(),
                config.temperature,
                config.keep_alive.clone(),
                config.system_prompt.clone(),
            ))),
            "openai_compatible_llm" | "openai_llm" | "deepseek_llm" | "groq_llm" => {
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    client,
                    config.model.clone(),
                    config.base_url.clone(),
                    config.llm_api_key.clone(),
                    config.temperature,
                    config.system_prompt.clone(),
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported LLM provider: {}", other)),
        }
    }
}
