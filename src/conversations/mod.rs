pub mod types;
pub mod pipeline;

pub use types::{ChatReply, ChatRequest};
pub use pipeline::ChatPipeline;
