/// Script-to-script phonetic mapping. Implementations must be deterministic.
pub trait TransliterateInterface: Send + Sync {
    fn transliterate(&self, text: &str) -> Result<String, anyhow::Error>;
}
