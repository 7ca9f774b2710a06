//! Presigned upload and download URLs against the external object store.
//!
//! The store is optional: without an `S3_BUCKET` the service still runs,
//! upload URL issuance fails with a 500, and image resolution skips
//! straight to literal URLs.

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Default expiry for presigned upload URLs, in seconds.
const DEFAULT_UPLOAD_EXPIRY_SECS: u64 = 300;

/// Default expiry for presigned download URLs, in seconds.
const DEFAULT_DOWNLOAD_EXPIRY_SECS: u64 = 3600;

/// A freshly issued upload slot: the key to store on the record and the
/// presigned PUT URL to upload the bytes to.
#[derive(Debug, Serialize)]
pub struct UploadTicket {
    pub key: String,
    pub url: String,
}

/// Thin wrapper over the S3 client for the two operations this service
/// needs: issue an upload URL, resolve a stored key to a download URL.
pub struct ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    upload_expiry: Duration,
    download_expiry: Duration,
}

impl ObjectStore {
    /// Build from environment. Returns `None` when `S3_BUCKET` is unset.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `S3_BUCKET`                | --      |
    /// | `S3_REGION`                | SDK default chain |
    /// | `UPLOAD_URL_EXPIRY_SECS`   | `300`   |
    /// | `DOWNLOAD_URL_EXPIRY_SECS` | `3600`  |
    pub async fn from_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET").ok()?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Ok(region) = std::env::var("S3_REGION") {
            loader = loader.region(aws_config::Region::new(region));
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        let upload_expiry = expiry_from_env("UPLOAD_URL_EXPIRY_SECS", DEFAULT_UPLOAD_EXPIRY_SECS);
        let download_expiry =
            expiry_from_env("DOWNLOAD_URL_EXPIRY_SECS", DEFAULT_DOWNLOAD_EXPIRY_SECS);

        Some(Self {
            client,
            bucket,
            upload_expiry,
            download_expiry,
        })
    }

    /// Issue a presigned PUT URL for a fresh object key.
    pub async fn presign_upload(&self) -> AppResult<UploadTicket> {
        let key = format!("uploads/{}", Uuid::new_v4());

        let config = PresigningConfig::expires_in(self.upload_expiry)
            .map_err(|e| AppError::InternalError(format!("presigning config: {e}")))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .presigned(config)
            .await
            .map_err(|e| AppError::InternalError(format!("upload URL issuance failed: {e}")))?;

        Ok(UploadTicket {
            key,
            url: presigned.uri().to_string(),
        })
    }

    /// Resolve a stored key to a presigned GET URL.
    ///
    /// Returns `None` on any failure so image resolution can degrade to the
    /// record's literal URL instead of an error.
    pub async fn presign_download(&self, key: &str) -> Option<String> {
        let config = match PresigningConfig::expires_in(self.download_expiry) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "presigning config");
                return None;
            }
        };

        match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
        {
            Ok(presigned) => Some(presigned.uri().to_string()),
            Err(e) => {
                tracing::warn!(key, error = %e, "download URL resolution failed");
                None
            }
        }
    }
}

/// Resolve the image URL for a record holding an optional stored-file key
/// and an optional literal URL. Total: always yields a URL.
pub async fn resolve_image(
    store: Option<&ObjectStore>,
    image_key: Option<&str>,
    literal: Option<&str>,
) -> String {
    let stored = match (store, image_key) {
        (Some(store), Some(key)) => store.presign_download(key).await,
        _ => None,
    };
    maris_core::media::resolve_image_url(stored, literal)
}

fn expiry_from_env(var: &str, default_secs: u64) -> Duration {
    let secs = std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}
