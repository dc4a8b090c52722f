pub mod interface;
pub mod google_translate;

pub use interface::TranslateInterface;
pub use google_translate::GoogleTranslate;
