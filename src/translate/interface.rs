use async_trait::async_trait;

/// Remote text translation
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` into `target_lang`.
    /// `source_lang` of `None` lets the service detect the source itself.
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, anyhow::Error>;
}
