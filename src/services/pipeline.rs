use std::sync::Arc;
use tracing::info;
use crate::clients::Transport;
use crate::config::Settings;
use crate::error::Result;
use crate::services::api::ApiService;
use crate::services::harvest::Harvester;
use crate::services::photos::{PhotoCache, PhotoReport};
use crate::storage::{MinioUploader, TableWriter};

/// What one end-to-end run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Set when every table already existed and nothing was fetched.
    pub already_downloaded: bool,
    pub businesses: usize,
    pub reviews: usize,
    pub photos: PhotoReport,
}

/// Harvests, persists the tables, then materializes photos.
pub async fn run(settings: &Settings, transport: Arc<dyn Transport>) -> Result<RunSummary> {
    let writer = TableWriter::new(&settings.output.data_path, settings.output.format);

    if writer.is_complete() {
        info!(path = %settings.output.data_path.display(), "Data already downloaded");
        return Ok(RunSummary {
            already_downloaded: true,
            ..RunSummary::default()
        });
    }

    if !settings.output.data_path.exists() {
        info!(path = %settings.output.data_path.display(), "Creating data directory");
        tokio::fs::create_dir_all(&settings.output.data_path).await?;
    }

    info!("Downloading data");
    let harvester = Harvester::new(
        ApiService::new(transport.clone()),
        &settings.harvest,
        &settings.api,
    );
    let output = harvester
        .harvest(&settings.harvest.locations, &settings.harvest.category)
        .await?;
    info!("Data downloaded");

    info!("Saving data");
    let written = writer.write_all(&output)?;
    info!("Data saved");

    if let Some(minio) = &settings.minio {
        info!(bucket = %minio.bucket, "Uploading tables to MinIO");
        let uploader = MinioUploader::new(minio).await?;
        uploader.upload_tables(&written).await?;
    }

    info!("Downloading photos");
    let cache = PhotoCache::new(transport, settings.photos_path());
    let photos = cache.materialize(&output.photos).await?;
    info!("Photos downloaded");

    Ok(RunSummary {
        already_downloaded: false,
        businesses: output.businesses.len(),
        reviews: output.reviews.len(),
        photos,
    })
}
