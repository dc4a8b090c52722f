/// ISO 639-1 code the pipeline treats as "no translation needed"
pub const ENGLISH: &str = "en";

/// Returned whenever detection is inconclusive
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Language detection never fails; an inconclusive result is `UNKNOWN_LANGUAGE`.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> String;
}
