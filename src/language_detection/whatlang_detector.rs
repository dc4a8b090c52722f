//! Whatlang-based language detector
//!
//! Trigram detection over a bounded prefix of the input. Whatlang's top
//! guess is used even when it is not flagged reliable; short chat messages
//! rarely are. Only a missing guess is reported as unknown.

use tracing::debug;
use whatlang::{Detector, Lang};

use super::interface::{LanguageDetector, UNKNOWN_LANGUAGE};

pub struct WhatlangDetector {
    detector: Detector,
    prefix_chars: usize,
}

impl WhatlangDetector {
    pub fn new(prefix_chars: usize) -> Self {
        tracing::info!("Initializing Whatlang language detector (prefix_chars={})", prefix_chars);
        Self {
            detector: Detector::new(),
            prefix_chars,
        }
    }

    fn prefix<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.prefix_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> String {
        let sample = self.prefix(text);
        if sample.trim().is_empty() {
            return UNKNOWN_LANGUAGE.to_string();
        }

        let code = match self.detector.detect(sample) {
            Some(info) => {
                debug!(
                    "whatlang guess: {:?} (confidence={:.2}, reliable={})",
                    info.lang(),
                    info.confidence(),
                    info.is_reliable()
                );
                iso_639_1(info.lang()).to_string()
            }
            None => UNKNOWN_LANGUAGE.to_string(),
        };
        debug!("Detected language: {}", code);
        code
    }
}

fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Hin => "hi",
        Lang::Mar => "mr",
        Lang::Nep => "ne",
        Lang::Ben => "bn",
        Lang::Pan => "pa",
        Lang::Guj => "gu",
        Lang::Urd => "ur",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Kan => "kn",
        Lang::Mal => "ml",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        // No two-letter mapping kept for the rest
        l => l.code(),
    }
}
