use admin_ui::{config::Config, handler::AppRouter, state::AppState};
use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::env_bool, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = env_bool("DEV_MODE", false)?;
    let is_enable_file = env_bool("ENABLE_FILE_LOG", false)?;

    init_logger("admin-ui", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🔗 Talking to API at {}", config.api_url);

    let state = AppState::new(&config);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down UI server...");

    Ok(())
}
