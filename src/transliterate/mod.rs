pub mod interface;
pub mod devanagari;

pub use interface::TransliterateInterface;
pub use devanagari::DevanagariTransliterator;
