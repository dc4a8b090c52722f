pub mod main;
pub mod system;
pub mod stateless_llm;
pub mod translate;
pub mod utils;

pub use main::Config;
pub use stateless_llm::LLMConfig;
pub use translate::{InboundSource, TransliterationScheme};
