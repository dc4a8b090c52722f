use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use serde_json::Value;

use crate::config_manager::main::Config;

/// Read a configuration file and substitute `${VAR_NAME}` placeholders from the environment.
/// Unknown variables are left as written.
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    substitute_env_vars(&content)
}

pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Deserialize configuration text, picking the format from the file extension
pub fn validate_config(content: &str, config_path: &str) -> Result<Config> {
    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
        let json_value: Value = serde_json::from_str(content)?;
        let config: Config = serde_json::from_value(json_value)?;
        Ok(config)
    } else {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

/// Load text file, stripping a UTF-8 BOM and falling back to lossy decoding
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let mut buffer = fs::read(file_path)?;
    if buffer.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buffer.drain(0..3);
    }

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(e) => {
            let (cow, _, _) = encoding_rs::UTF_8.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_manager::{InboundSource, TransliterationScheme};

    #[test]
    fn yaml_sections_fall_back_to_defaults() {
        let config = validate_config(
            "llm_config:\n  model: llama3\n",
            "conf.yaml",
        )
        .unwrap();

        assert_eq!(config.llm_config.model, "llama3");
        assert_eq!(config.llm_config.llm_provider, "ollama_llm");
        assert_eq!(config.llm_config.base_url, "http://localhost:11434");
        assert_eq!(config.system_config.port, 8000);
        assert_eq!(config.detection_config.prefix_chars, 100);
        assert_eq!(config.translation_config.inbound_source, InboundSource::Hindi);
        assert_eq!(config.transliteration_config.scheme, TransliterationScheme::Itrans);
    }

    #[test]
    fn json_ld_context_is_ignored() {
        let config = validate_config(
            r#"{
                "@context": {"@vocab": "https://example.org/config#"},
                "translation_config": {"inbound_source": "detected"},
                "transliteration_config": {"scheme": "iast"}
            }"#,
            "conf.jsonld",
        )
        .unwrap();

        assert_eq!(config.translation_config.inbound_source, InboundSource::Detected);
        assert_eq!(config.transliteration_config.scheme, TransliterationScheme::Iast);
    }

    #[test]
    fn env_placeholders_are_substituted() {
        std::env::set_var("RELAY_TEST_MODEL_NAME", "qwen2:0.5b");
        let text = substitute_env_vars(
            "model: ${RELAY_TEST_MODEL_NAME}\nkey: ${RELAY_TEST_SURELY_UNSET_VAR}",
        )
        .unwrap();

        assert!(text.contains("model: qwen2:0.5b"));
        assert!(text.contains("${RELAY_TEST_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("definitely/not/here/conf.yaml").is_err());
    }

    #[test]
    fn bom_is_stripped() {
        let path = std::env::temp_dir().join(format!("relay-bom-{}.yaml", uuid::Uuid::new_v4()));
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"system_config:\n  port: 9100\n");
        fs::write(&path, bytes).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.port, 9100);

        fs::remove_file(path).ok();
    }
}
