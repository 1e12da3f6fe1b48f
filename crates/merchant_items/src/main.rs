use anyhow::{Context, Result};
use dotenv::dotenv;
use merchant_items::{handler::AppRouter, state::AppState};
use mimalloc::MiMalloc;
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("merchant-items-service", config.is_dev);

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.max_connections,
        config.run_migrations,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool);

    info!("🚀 Merchant items service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Merchant items service shutdown complete.");

    Ok(())
}
