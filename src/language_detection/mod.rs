pub mod interface;
pub mod whatlang_detector;

pub use interface::{LanguageDetector, ENGLISH, UNKNOWN_LANGUAGE};
pub use whatlang_detector::WhatlangDetector;
