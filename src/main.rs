mod agent;
mod config_manager;
mod conversations;
mod error;
mod language_detection;
mod routes;
mod state;
mod translate;
mod transliterate;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("relay_backend=debug,tower_http=debug")),
        )
        .init();

    let config = match Config::discover()? {
        Some((config, path)) => {
            info!("Loaded configuration from: {}", path);
            config
        }
        None => {
            warn!(
                "No config file found (tried {:?}), using defaults",
                Config::candidate_paths()
            );
            Config::default()
        }
    };

    let addr = config.system_config.socket_addr()?;
    info!(
        "Using model {} via {} at {}",
        config.llm_config.model, config.llm_config.llm_provider, config.llm_config.base_url
    );

    // Initialize app state
    let app_state = AppState::new(config).await?;
    let app = routes::build_app(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
