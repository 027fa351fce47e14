use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use crate::clients::Transport;
use crate::error::Result;
use crate::models::PhotoRecord;

/// Outcome counts of one [`PhotoCache::materialize`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Downloads photos into a directory keyed by [`PhotoRecord::file_name`],
/// skipping any file already present.
pub struct PhotoCache {
    transport: Arc<dyn Transport>,
    target_dir: PathBuf,
}

impl PhotoCache {
    pub fn new(transport: Arc<dyn Transport>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn path_for(&self, photo: &PhotoRecord) -> PathBuf {
        self.target_dir.join(&photo.file_name)
    }

    /// Failed downloads are logged and skipped; only local filesystem errors
    /// abort the batch.
    pub async fn materialize(&self, photos: &[PhotoRecord]) -> Result<PhotoReport> {
        if !fs::try_exists(&self.target_dir).await? {
            info!(path = %self.target_dir.display(), "Creating photo directory");
            fs::create_dir_all(&self.target_dir).await?;
        }

        let mut report = PhotoReport::default();

        for photo in photos {
            let file_path = self.path_for(photo);

            if fs::try_exists(&file_path).await? {
                debug!(file = %photo.file_name, "Photo already downloaded");
                report.skipped += 1;
                continue;
            }

            let response = match self.transport.get(&photo.photo_url).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        photo_url = %photo.photo_url,
                        error = %e,
                        "Photo request failed"
                    );
                    report.failed += 1;
                    continue;
                }
            };

            if !response.status.is_success() {
                warn!(
                    photo_url = %photo.photo_url,
                    status = response.status.as_u16(),
                    body = %response.text(),
                    "Photo request failed with non-success status"
                );
                report.failed += 1;
                continue;
            }

            write_atomically(&file_path, &response.body).await?;
            report.downloaded += 1;
        }

        info!(
            downloaded = report.downloaded,
            skipped = report.skipped,
            failed = report.failed,
            "Photos materialized"
        );

        Ok(report)
    }
}

/// Writes through a `.part` sibling so an interrupted write never looks cached.
/// The `.part` file is removed on any failure.
async fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);

    if let Err(e) = write_then_rename(&part, path, bytes).await {
        let _ = fs::remove_file(&part).await;
        return Err(e.into());
    }
    Ok(())
}

async fn write_then_rename(part: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(part).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);
    fs::rename(part, path).await
}
