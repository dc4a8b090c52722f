use std::sync::Arc;

use crate::config_manager::Config;
use crate::conversations::ChatPipeline;

/// Process-wide state, built once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<ChatPipeline>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pipeline = ChatPipeline::from_config(&config)?;
        Ok(Self::with_pipeline(config, pipeline))
    }

    pub fn with_pipeline(config: Config, pipeline: ChatPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
