//! # SkillSwap Server
//!
//! Entry point: sets up logging, loads configuration, picks the store and
//! serves the HTTP API until Ctrl-C.

use anyhow::Result;
use tracing::info;

use skillswap_server::config::Settings;
use skillswap_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    skillswap_server::telemetry::init_tracing();

    info!("Starting SkillSwap server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        database = settings.database.url.is_some(),
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
