use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::{Credentials, Region, BehaviorVersion};
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use chrono::{DateTime, Datelike, Utc};
use std::path::Path;
use tracing::{debug, error, info};
use crate::config::MinioConfig;
use crate::error::{Result, Error};

/// Uploads harvest table files to an S3-compatible bucket.
pub struct MinioUploader {
    pub client: S3Client,
    bucket: String,
    prefix: String,
}

impl MinioUploader {
    pub async fn new(config: &MinioConfig) -> Result<Self> {
        debug!(
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            region = %config.region,
            "Initializing MinIO uploader"
        );

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "static-credentials",
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        let client = S3Client::from_conf(s3_config);

        // Verify bucket exists and is accessible
        if let Err(e) = client.head_bucket().bucket(&config.bucket).send().await {
            error!(
                error = ?e,
                bucket = %config.bucket,
                "Failed to access bucket"
            );
            return Err(Error::Storage(
                format!("Cannot access bucket '{}': {}", config.bucket, e)
            ));
        }

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            prefix: config.prefix.clone(),
        })
    }

    /// Date-partitioned object key for a table file.
    pub fn object_key(prefix: &str, file_name: &str, at: DateTime<Utc>) -> String {
        format!(
            "{}/year={}/month={:02}/day={:02}/{}",
            prefix.trim_end_matches('/'),
            at.year(),
            at.month(),
            at.day(),
            file_name
        )
    }

    pub async fn upload_tables(&self, paths: &[impl AsRef<Path>]) -> Result<()> {
        let now = Utc::now();
        for path in paths {
            let path = path.as_ref();
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| Error::Storage(format!("Invalid table path {}", path.display())))?;
            let key = Self::object_key(&self.prefix, file_name, now);
            self.upload_file(path, &key).await?;
        }
        Ok(())
    }

    pub async fn upload_file(&self, local_path: &Path, s3_key: &str) -> Result<()> {
        let file_size = std::fs::metadata(local_path)?.len();
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| Error::Storage(format!("Cannot read {}: {}", local_path.display(), e)))?;

        debug!(
            local_path = %local_path.display(),
            s3_key = s3_key,
            file_size = file_size,
            "Uploading file to MinIO"
        );

        let result = self.client
            .put_object()
            .bucket(&self.bucket)
            .key(s3_key)
            .body(body)
            .content_type(content_type(local_path))
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(s3_key = s3_key, bucket = %self.bucket, "File uploaded");
                Ok(())
            }
            Err(SdkError::ServiceError(service_error)) => {
                error!(
                    error = ?service_error.err(),
                    "MinIO service error"
                );
                Err(Error::Storage(format!("MinIO service error: {}", service_error.err())))
            }
            Err(e) => {
                error!(error = ?e, "MinIO upload error");
                Err(Error::Storage(format!("MinIO error: {}", e)))
            }
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => "text/csv",
        Some("parquet") => "application/x-parquet",
        Some("json") => "application/x-ndjson",
        _ => "application/octet-stream",
    }
}
