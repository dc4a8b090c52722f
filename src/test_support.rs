use async_trait::async_trait;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::agent::{Message, StatelessLLMInterface};
use crate::config_manager::InboundSource;
use crate::conversations::ChatPipeline;
use crate::language_detection::LanguageDetector;
use crate::translate::TranslateInterface;
use crate::transliterate::TransliterateInterface;

/// Serve `app` on an ephemeral localhost port and return its base URL
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub struct FixedDetector {
    pub code: &'static str,
    pub calls: AtomicUsize,
}

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.code.to_string()
    }
}

/// Answers `to_english` for target "en" and `to_hindi` for target "hi"
#[derive(Default)]
pub struct MockTranslator {
    pub to_english: String,
    pub to_hindi: String,
    pub fail: bool,
    /// (text, source, target) per call
    pub calls: Mutex<Vec<(String, Option<String>, String)>>,
}

impl MockTranslator {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslateInterface for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, anyhow::Error> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.map(|s| s.to_string()),
            target_lang.to_string(),
        ));
        if self.fail {
            anyhow::bail!("translation service unavailable");
        }
        match target_lang {
            "en" => Ok(self.to_english.clone()),
            _ => Ok(self.to_hindi.clone()),
        }
    }
}

/// Returns `reply`, or fails with "connection refused" when it is `None`
#[derive(Default)]
pub struct MockLLM {
    pub reply: Option<String>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<Vec<Message>>>,
}

impl MockLLM {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatelessLLMInterface for MockLLM {
    async fn chat_completion(
        &self,
        messages: Vec<Message>,
        _system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(messages);
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn health_check(&self) -> Result<bool, anyhow::Error> {
        Ok(self.reply.is_some())
    }
}

pub struct MockTransliterator {
    pub output: String,
    pub calls: AtomicUsize,
}

impl TransliterateInterface for MockTransliterator {
    fn transliterate(&self, _text: &str) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Every collaborator of a pipeline, kept around so tests can inspect calls
pub struct Mocks {
    pub detector: Arc<FixedDetector>,
    pub translator: Arc<MockTranslator>,
    pub llm: Arc<MockLLM>,
    pub transliterator: Arc<MockTransliterator>,
}

impl Mocks {
    pub fn new(detected: &'static str, llm: MockLLM, translator: MockTranslator, hinglish: &str) -> Self {
        Self {
            detector: Arc::new(FixedDetector {
                code: detected,
                calls: AtomicUsize::new(0),
            }),
            translator: Arc::new(translator),
            llm: Arc::new(llm),
            transliterator: Arc::new(MockTransliterator {
                output: hinglish.to_string(),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn pipeline(&self, inbound_source: InboundSource) -> ChatPipeline {
        ChatPipeline::new(
            self.detector.clone(),
            self.translator.clone(),
            self.llm.clone(),
            self.transliterator.clone(),
            inbound_source,
        )
    }

    pub fn transliteration_calls(&self) -> usize {
        self.transliterator.calls.load(Ordering::SeqCst)
    }
}
