use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::interface::TranslateInterface;

/// Longest input the web endpoint accepts in one request
pub const MAX_TEXT_CHARS: usize = 5000;

/// Google Translate through the public `translate_a/single` web endpoint
pub struct GoogleTranslate {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslate {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        info!("Initialized GoogleTranslate: base_url={}", base_url);
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, anyhow::Error> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            anyhow::bail!(
                "Text of {} characters exceeds the {} character translation limit",
                char_count,
                MAX_TEXT_CHARS
            );
        }

        let source = source_lang.unwrap_or("auto");
        debug!("Translating {} chars: {} -> {}", char_count, source, target_lang);

        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation service error {}: {}", status, body.trim());
        }

        let body: Value = response.json().await?;
        parse_translation(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response
fn parse_translation(body: &Value) -> Result<String, anyhow::Error> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("Invalid response from translation service"))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect())
}
