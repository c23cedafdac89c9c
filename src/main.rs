use brownbag_api::{api, config::Config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    logging::init(&config.logging)?;

    info!("Starting Brownbag API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = config.server.port,
        allowed_origins = ?config.server.allowed_origins,
        "Server configuration"
    );

    api::server::start_server(&config.server).await
}
