use clap::Parser;
use relay_edge::utils::{logger, validation::Validate};
use relay_edge::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting relay-edge");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("🌐 Listening on http://localhost:{}", config.port);
    tracing::info!("🔁 Proxying /wordpress to {}", config.wordpress_url);

    relay_edge::run_server(config).await?;

    Ok(())
}
