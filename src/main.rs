use covers_odds::{OddsClient, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = OddsClient::new();
    let records = client.snapshot().await?;

    info!(records, "scraping completed");
    Ok(())
}
