use serde::{Deserialize, Serialize};

/// Which source language the inbound translation step assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InboundSource {
    /// Always translate from Hindi, whatever the detector reported
    #[default]
    Hindi,
    /// Use the detected language code, or let the service guess on "unknown"
    Detected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_translate_url")]
    pub base_url: String,

    #[serde(rename = "inbound_source")]
    #[serde(default)]
    pub inbound_source: InboundSource,
}

fn default_translate_url() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_url(),
            inbound_source: InboundSource::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Only this many leading characters are inspected
    #[serde(rename = "prefix_chars")]
    #[serde(default = "default_prefix_chars")]
    pub prefix_chars: usize,
}

fn default_prefix_chars() -> usize {
    100
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            prefix_chars: default_prefix_chars(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationScheme {
    #[default]
    Itrans,
    Iast,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransliterationConfig {
    #[serde(default)]
    pub scheme: TransliterationScheme,
}
