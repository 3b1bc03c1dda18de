use anyhow::Result;
use forme_site::config::Config;
use forme_site::i18n::CatalogValidator;
use forme_site::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (absent in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("forme_site=info".parse()?),
        )
        .init();

    info!("Starting FORME site v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let report = CatalogValidator::validate();
    for warning in &report.warnings {
        warn!("Catalog: {}", warning);
    }
    if report.has_errors() {
        anyhow::bail!("Locale catalogs are incomplete: {}", report.errors.join("; "));
    }

    if config.telegram_credentials().is_none() {
        warn!("TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, lead submissions will fail");
    }
    info!("Serving {} from {}", config.site_url, config.public_dir);

    server::serve(config).await
}
