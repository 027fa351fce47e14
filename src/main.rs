use std::sync::Arc;
use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yelp_harvest::{run, HttpClient, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;
    let started_at = Utc::now();
    let timestamp = started_at.format("%Y-%m-%d %H:%M:%S").to_string();

    info!(
        timestamp = %timestamp,
        category = %settings.harvest.category,
        locations = ?settings.harvest.locations,
        data_path = %settings.output.data_path.display(),
        "Starting harvest"
    );

    let client = Arc::new(HttpClient::new(&settings.api)?);
    let summary = run(&settings, client).await?;

    let elapsed = Utc::now() - started_at;
    info!(
        already_downloaded = summary.already_downloaded,
        businesses = summary.businesses,
        reviews = summary.reviews,
        photos_downloaded = summary.photos.downloaded,
        photos_skipped = summary.photos.skipped,
        photos_failed = summary.photos.failed,
        elapsed_secs = elapsed.num_seconds(),
        "Harvest summary"
    );

    Ok(())
}
