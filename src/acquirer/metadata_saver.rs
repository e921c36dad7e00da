use std::path::{Path, PathBuf};

use super::errors::{AcquisitionError, AcquisitionResult};
use crate::image_search::{ImageMetadata, ImageRecord};
use crate::utils::metadata_file_name;

/// Save the metadata side-car for a saved image
///
/// Writes `record` plus `local_path` as pretty-printed JSON to
/// `<metadata_dir>/<stem>_metadata.json` and returns the written path.
pub async fn save_image_metadata(
    metadata: &ImageMetadata,
    basename: &str,
    metadata_dir: &Path,
) -> AcquisitionResult<PathBuf> {
    let url = &metadata.record.image_url;
    let path = metadata_dir.join(metadata_file_name(basename));

    let json = serde_json::to_string_pretty(metadata).map_err(|source| {
        AcquisitionError::Metadata {
            url: url.clone(),
            source,
        }
    })?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|source| AcquisitionError::Filesystem {
            url: url.clone(),
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Read a metadata side-car back
pub async fn load_image_metadata(path: &Path) -> anyhow::Result<ImageMetadata> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Attach the saved image path to a record
#[must_use]
pub fn with_local_path(record: &ImageRecord, image_path: &Path) -> ImageMetadata {
    ImageMetadata {
        record: record.clone(),
        local_path: image_path.to_string_lossy().into_owned(),
    }
}
