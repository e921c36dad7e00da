//! Image acquisition: download, optional transform, persist
//!
//! One acquisition turns an `ImageRecord` into an image file under
//! `<root>/<country>/<theme>/images/` and, when enabled, a JSON side-car under
//! `<root>/<country>/<theme>/metadata/`. Failures come back as
//! `AcquisitionError`; nothing is retried here.

mod download;
pub mod errors;
pub mod metadata_saver;
pub mod transform;

pub use download::download_image_bytes;
pub use errors::{AcquisitionError, AcquisitionErrorKind, AcquisitionResult};
pub use metadata_saver::{load_image_metadata, save_image_metadata, with_local_path};

use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::config::RunConfig;
use crate::image_search::{ImageRecord, browser_headers};
use crate::utils::{image_basename, image_file_name, scope_dirs};

/// Paths written by a successful acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub image_path: PathBuf,
    /// `None` when metadata saving is disabled
    pub metadata_path: Option<PathBuf>,
}

/// Acquires one image record
pub trait Acquire {
    fn acquire(
        &self,
        record: &ImageRecord,
    ) -> impl Future<Output = AcquisitionResult<SavedImage>> + Send;
}

/// Settings the acquirer needs from a run configuration
#[derive(Debug, Clone)]
pub struct AcquirerConfig {
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub resize: Option<(u32, u32)>,
    pub save_metadata: bool,
    pub max_image_size: usize,
}

impl From<&RunConfig> for AcquirerConfig {
    fn from(config: &RunConfig) -> Self {
        Self {
            output_dir: config.output_dir().clone(),
            timeout: config.timeout(),
            resize: config.resize(),
            save_metadata: config.save_metadata(),
            max_image_size: config.max_image_size(),
        }
    }
}

/// Downloads images over HTTP and saves them with their metadata
#[derive(Debug, Clone)]
pub struct ImageAcquirer {
    client: Client,
    config: AcquirerConfig,
}

impl ImageAcquirer {
    /// `client` should carry the browser headers as default headers
    #[must_use]
    pub fn new(client: Client, config: AcquirerConfig) -> Self {
        Self { client, config }
    }

    /// Build an acquirer with its own HTTP client
    pub fn from_config(config: AcquirerConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::new(client, config))
    }

    #[must_use]
    pub fn config(&self) -> &AcquirerConfig {
        &self.config
    }

    /// Turn downloaded bytes into the bytes to write
    async fn prepare_bytes(&self, url: &str, bytes: Vec<u8>) -> AcquisitionResult<Vec<u8>> {
        let invalid = |reason: String| AcquisitionError::InvalidImage {
            url: url.to_string(),
            reason,
        };

        match self.config.resize {
            Some(dimensions) => {
                tokio::task::spawn_blocking(move || transform::resize_to_png(&bytes, dimensions))
                    .await
                    .map_err(|e| invalid(format!("resize task failed: {e}")))?
                    .map_err(invalid)
            }
            None => {
                let format = transform::verify_image(&bytes).map_err(invalid)?;
                debug!(url, ?format, "Verified image format");
                Ok(bytes)
            }
        }
    }
}

async fn create_dir(url: &str, dir: &Path) -> AcquisitionResult<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| AcquisitionError::Filesystem {
            url: url.to_string(),
            path: dir.to_path_buf(),
            source,
        })
}

/// Remove a partial or orphaned image so images and side-cars stay paired
async fn discard_image(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        debug!(path = %path.display(), error = %e, "Failed to remove image file");
    }
}

impl Acquire for ImageAcquirer {
    async fn acquire(&self, record: &ImageRecord) -> AcquisitionResult<SavedImage> {
        let url = record.image_url.as_str();

        let (images_dir, metadata_dir) =
            scope_dirs(&self.config.output_dir, &record.country, &record.theme);
        create_dir(url, &images_dir).await?;
        create_dir(url, &metadata_dir).await?;

        let basename = image_basename(url);
        let image_path = images_dir.join(image_file_name(&basename));

        let bytes = download_image_bytes(
            &self.client,
            url,
            self.config.timeout,
            self.config.max_image_size,
        )
        .await?;
        let bytes = self.prepare_bytes(url, bytes).await?;

        if let Err(source) = tokio::fs::write(&image_path, &bytes).await {
            discard_image(&image_path).await;
            return Err(AcquisitionError::Filesystem {
                url: url.to_string(),
                path: image_path,
                source,
            });
        }

        let metadata_path = if self.config.save_metadata {
            let metadata = with_local_path(record, &image_path);
            match save_image_metadata(&metadata, &basename, &metadata_dir).await {
                Ok(path) => Some(path),
                Err(e) => {
                    discard_image(&image_path).await;
                    return Err(e);
                }
            }
        } else {
            None
        };

        Ok(SavedImage {
            image_path,
            metadata_path,
        })
    }
}
