//! Chat orchestration: detect → translate in → infer → translate out → transliterate

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::agent::{Message, StatelessLLMFactory, StatelessLLMInterface};
use crate::config_manager::{Config, InboundSource};
use crate::conversations::types::{ChatReply, ChatRequest, TargetLanguage};
use crate::error::ChatError;
use crate::language_detection::{LanguageDetector, WhatlangDetector, ENGLISH, UNKNOWN_LANGUAGE};
use crate::translate::{GoogleTranslate, TranslateInterface};
use crate::transliterate::{DevanagariTransliterator, TransliterateInterface};

const HINDI: &str = "hi";

/// Stateless per-request pipeline over shared, process-wide clients
pub struct ChatPipeline {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn TranslateInterface>,
    llm: Arc<dyn StatelessLLMInterface>,
    transliterator: Arc<dyn TransliterateInterface>,
    inbound_source: InboundSource,
}

impl ChatPipeline {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn TranslateInterface>,
        llm: Arc<dyn StatelessLLMInterface>,
        transliterator: Arc<dyn TransliterateInterface>,
        inbound_source: InboundSource,
    ) -> Self {
        Self {
            detector,
            translator,
            llm,
            transliterator,
            inbound_source,
        }
    }

    /// Build the production collaborators described by `config`
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = config.system_config.http_client()?;
        let llm = StatelessLLMFactory::create_llm(&config.llm_config, client.clone())?;
        let translator = Arc::new(GoogleTranslate::new(
            client,
            config.translation_config.base_url.clone(),
        ));
        let detector = Arc::new(WhatlangDetector::new(config.detection_config.prefix_chars));
        let transliterator = Arc::new(DevanagariTransliterator::new(
            config.transliteration_config.scheme,
        ));

        info!(
            "Chat pipeline ready (inbound_source={:?})",
            config.translation_config.inbound_source
        );
        Ok(Self::new(
            detector,
            translator,
            llm,
            transliterator,
            config.translation_config.inbound_source,
        ))
    }

    /// Run one request. The mode and message are validated before any external call,
    /// and inference happens exactly once for a valid request.
    pub async fn run(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        let mode = TargetLanguage::parse(request.target_language.as_deref())?;
        if request.message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        debug!("Chat request: mode={:?}, chars={}", mode, request.message.chars().count());

        let query = self.to_english(request.message).await?;
        let english = self.infer(query).await?;

        if !mode.needs_hindi() {
            return Ok(ChatReply::single(english));
        }
        let hindi = self.to_hindi(&english).await?;

        match mode {
            TargetLanguage::Hindi => Ok(ChatReply::single(hindi)),
            TargetLanguage::Hinglish => {
                let hinglish = self.to_hinglish(&hindi)?;
                Ok(ChatReply::single(hinglish))
            }
            _ => {
                let hinglish = self.to_hinglish(&hindi)?;
                Ok(ChatReply::All {
                    reply_english: english,
                    reply_hindi: hindi,
                    reply_hinglish: hinglish,
                })
            }
        }
    }

    /// Whether the inference backend is reachable
    pub async fn llm_healthy(&self) -> bool {
        self.llm.health_check().await.unwrap_or(false)
    }

    async fn to_english(&self, message: String) -> Result<String, ChatError> {
        let detected = self.detector.detect(&message);
        if detected == ENGLISH {
            return Ok(message);
        }

        // Detection only gates translation; the source stays Hindi unless configured otherwise.
        let source = match self.inbound_source {
            InboundSource::Hindi => Some(HINDI),
            InboundSource::Detected if detected == UNKNOWN_LANGUAGE => None,
            InboundSource::Detected => Some(detected.as_str()),
        };
        debug!("Input detected as {}, translating from {:?}", detected, source);

        self.translator
            .translate(&message, source, ENGLISH)
            .await
            .map_err(|e| {
                error!("Inbound translation failed: {:#}", e);
                ChatError::Translation(e)
            })
    }

    async fn infer(&self, query: String) -> Result<String, ChatError> {
        let reply = self
            .llm
            .chat_completion(vec![Message::user(query)], None)
            .await
            .map_err(|e| {
                error!("Inference failed: {:#}", e);
                ChatError::Inference(e)
            })?;
        debug!("Model replied with {} chars", reply.chars().count());
        Ok(reply)
    }

    async fn to_hindi(&self, english: &str) -> Result<String, ChatError> {
        self.translator
            .translate(english, Some(ENGLISH), HINDI)
            .await
            .map_err(|e| {
                error!("Outbound translation failed: {:#}", e);
                ChatError::Translation(e)
            })
    }

    fn to_hinglish(&self, hindi: &str) -> Result<String, ChatError> {
        self.transliterator.transliterate(hindi).map_err(|e| {
            error!("Transliteration failed: {:#}", e);
            ChatError::Transliteration(e)
        })
    }
}
