use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config_manager::stateless_llm::LLMConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translate::{DetectionConfig, TranslationConfig, TransliterationConfig};

/// Main configuration for the application, YAML or JSON(-LD)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "llm_config")]
    #[serde(default)]
    pub llm_config: LLMConfig,

    #[serde(rename = "translation_config")]
    #[serde(default)]
    pub translation_config: TranslationConfig,

    #[serde(rename = "detection_config")]
    #[serde(default)]
    pub detection_config: DetectionConfig,

    #[serde(rename = "transliteration_config")]
    #[serde(default)]
    pub transliteration_config: TransliterationConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_text, validate_config};
        let content = read_config_text(path)?;
        validate_config(&content, path)
    }

    /// Candidate config locations, most specific first
    pub fn candidate_paths() -> Vec<String> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.json".to_string()),
            path_string(&exe_dir.join("conf.yaml")),
            path_string(&exe_dir.join("conf.json")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first candidate path that exists.
    /// `Ok(None)` means no candidate exists; a file that exists but fails to load is an error.
    pub fn discover() -> anyhow::Result<Option<(Self, String)>> {
        Self::discover_in(Self::candidate_paths())
    }

    pub fn discover_in(paths: Vec<String>) -> anyhow::Result<Option<(Self, String)>> {
        for path in paths {
            if !Path::new(&path).exists() {
                debug!("No config file at {}", path);
                continue;
            }
            let cfg = Self::load(&path)
                .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path, e))?;
            return Ok(Some((cfg, path)));
        }
        Ok(None)
    }
}

fn path_string(path: &Path) -> Option<String> {
    path.to_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("relay-conf-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn malformed_existing_file_fails_discovery() {
        let bad = temp_config("llm_config:\n  temperature: hot\n");
        let good = temp_config("llm_config:\n  model: llama3\n");
        let bad_path = bad.to_str().unwrap().to_string();

        let err = Config::discover_in(vec![bad_path.clone(), good.to_str().unwrap().to_string()])
            .err()
            .unwrap();
        assert!(err.to_string().contains(&bad_path), "{err}");

        std::fs::remove_file(bad).ok();
        std::fs::remove_file(good).ok();
    }

    #[test]
    fn missing_paths_are_skipped() {
        let good = temp_config("llm_config:\n  model: llama3\n");
        let good_path = good.to_str().unwrap().to_string();

        let (config, path) = Config::discover_in(vec![
            "definitely/not/here/conf.yaml".to_string(),
            good_path.clone(),
        ])
        .unwrap()
        .unwrap();
        assert_eq!(config.llm_config.model, "llama3");
        assert_eq!(path, good_path);

        std::fs::remove_file(good).ok();
    }

    #[test]
    fn nothing_found_is_none() {
        let found = Config::discover_in(vec!["definitely/not/here/conf.yaml".to_string()]).unwrap();
        assert!(found.is_none());
    }
}
