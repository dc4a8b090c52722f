use serde::{Deserialize, Serialize};

use crate::error::ChatError;

pub const SUPPORTED_TARGET_LANGUAGES: [&str; 4] = ["english", "hindi", "hinglish", "all"];

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// Output mode selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    English,
    Hindi,
    Hinglish,
    All,
}

impl TargetLanguage {
    /// Absent means English. Matching ignores case and surrounding whitespace.
    pub fn parse(value: Option<&str>) -> Result<Self, ChatError> {
        let Some(raw) = value else {
            return Ok(TargetLanguage::English);
        };
        match raw.trim().to_lowercase().as_str() {
            "english" => Ok(TargetLanguage::English),
            "hindi" => Ok(TargetLanguage::Hindi),
            "hinglish" => Ok(TargetLanguage::Hinglish),
            "all" => Ok(TargetLanguage::All),
            _ => Err(ChatError::UnsupportedTargetLanguage(raw.to_string())),
        }
    }

    pub fn needs_hindi(self) -> bool {
        !matches!(self, TargetLanguage::English)
    }
}

/// Reply shape depends on the mode: one field, or all three renderings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    All {
        reply_english: String,
        reply_hindi: String,
        reply_hinglish: String,
    },
    Single {
        reply: String,
    },
}

impl ChatReply {
    pub fn single(reply: impl Into<String>) -> Self {
        ChatReply::Single { reply: reply.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!(TargetLanguage::parse(None).unwrap(), TargetLanguage::English);
        assert_eq!(TargetLanguage::parse(Some("Hinglish")).unwrap(), TargetLanguage::Hinglish);
        assert_eq!(TargetLanguage::parse(Some(" ALL ")).unwrap(), TargetLanguage::All);
        assert_eq!(TargetLanguage::parse(Some("hindi")).unwrap(), TargetLanguage::Hindi);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        match TargetLanguage::parse(Some("french")) {
            Err(ChatError::UnsupportedTargetLanguage(v)) => assert_eq!(v, "french"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(TargetLanguage::parse(Some("")).is_err());
    }

    #[test]
    fn reply_shapes() {
        assert_eq!(
            serde_json::to_value(ChatReply::single("Hi there")).unwrap(),
            json!({"reply": "Hi there"})
        );
        let all = ChatReply::All {
            reply_english: "Hi".to_string(),
            reply_hindi: "नमस्ते".to_string(),
            reply_hinglish: "namaste".to_string(),
        };
        assert_eq!(
            serde_json::to_value(all).unwrap(),
            json!({"reply_english": "Hi", "reply_hindi": "नमस्ते", "reply_hinglish": "namaste"})
        );
    }

    #[test]
    fn target_language_is_optional() {
        let req: ChatRequest = serde_json::from_value(json!({"message": "Hello"})).unwrap();
        assert_eq!(req.target_language, None);
    }
}
