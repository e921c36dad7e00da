//! URL and path manipulation utilities.
//!
//! Maps image URLs onto the on-disk layout used by the acquirer:
//! `<root>/<country>/<theme>/images/img_<basename>` and
//! `<root>/<country>/<theme>/metadata/<stem>_metadata.json`.

use std::path::{Path, PathBuf};
use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use super::constants::{IMAGE_FILE_PREFIX, IMAGES_DIR, METADATA_DIR, METADATA_FILE_SUFFIX};

/// Derive the base file name for an image URL
///
/// Takes the final path segment of the URL. When the URL does not parse,
/// everything after the last `/` is used instead. The result is sanitized for
/// the local filesystem.
///
/// URLs that carry a query string get `_<xxh3 of the URL>` inserted before the
/// extension (`photo.jpg?id=1` -> `photo_<hash>.jpg`), so URLs differing only
/// by query map to distinct image and side-car names. The fragment is ignored.
///
/// URLs without a usable final segment (`https://host/`, `https://host/dir/`)
/// fall back to `image_<xxh3 of the URL>` so every URL still maps to a stable
/// name.
#[must_use]
pub fn image_basename(image_url: &str) -> String {
    let (segment, has_query) = match Url::parse(image_url) {
        Ok(parsed) => (
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_string)
                .unwrap_or_default(),
            parsed.query().is_some_and(|q| !q.is_empty()),
        ),
        Err(_) => (
            image_url
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
            false,
        ),
    };

    let hash = format!("{:016x}", xxh3_64(image_url.as_bytes()));
    let sanitized = sanitize_filename::sanitize(&segment);
    if !is_usable_name(&sanitized) {
        return format!("image_{hash}");
    }
    if !has_query {
        return sanitized;
    }

    // Hash goes into the stem: side-car names stop at the first '.'
    match sanitized.split_once('.') {
        Some((stem, rest)) => format!("{stem}_{hash}.{rest}"),
        None => format!("{sanitized}_{hash}"),
    }
}

fn is_usable_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().all(|c| c == '.')
}

/// Check that a scope tag maps to a directory of its own
///
/// Tags that sanitize to nothing or to dots only (`""`, `".."`) would collapse
/// into, or escape, the parent directory.
#[must_use]
pub fn is_valid_scope_tag(tag: &str) -> bool {
    is_usable_name(&sanitize_filename::sanitize(tag))
}

/// File name of the saved image: `img_<basename>`
#[must_use]
pub fn image_file_name(basename: &str) -> String {
    format!("{IMAGE_FILE_PREFIX}{basename}")
}

/// File name of the metadata side-car: the basename up to its first `.`,
/// followed by `_metadata.json`
#[must_use]
pub fn metadata_file_name(basename: &str) -> String {
    let stem = basename.split('.').next().unwrap_or(basename);
    format!("{stem}{METADATA_FILE_SUFFIX}")
}

/// Directory pair `(images, metadata)` for a `(country, theme)` scope
#[must_use]
pub fn scope_dirs(output_root: &Path, country: &str, theme: &str) -> (PathBuf, PathBuf) {
    let theme_dir = output_root
        .join(sanitize_filename::sanitize(country))
        .join(sanitize_filename::sanitize(theme));
    (theme_dir.join(IMAGES_DIR), theme_dir.join(METADATA_DIR))
}
