use admin_api::{config::Config, handler::AppRouter, state::AppState};
use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{ConnectionManager, env_bool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = env_bool("DEV_MODE", false)?;
    let is_enable_file = env_bool("ENABLE_FILE_LOG", false)?;

    init_logger("admin-api", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        info!("Running migrations...");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("Migrations completed successfully");
    }

    let state = AppState::new(pool, &config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
