//! Core configuration types for image crawl runs
//!
//! `RunConfig` carries everything one run needs: the query and its scope
//! tags, the stop policy inputs, request parameters and acquisition options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::image_search::FilterShorthand;
use crate::utils::{
    DEFAULT_LIMIT, DEFAULT_MAX_IMAGE_SIZE, DEFAULT_TIMEOUT_SECS, SEARCH_ENDPOINT, UNKNOWN_SCOPE,
};

/// Main configuration struct for an image crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Root under which `<country>/<theme>/{images,metadata}` are created
    pub(crate) output_dir: PathBuf,

    /// Search query text. Never empty (validated in the builder).
    pub(crate) query: String,

    /// Number of successful downloads after which the run stops. At least 1.
    pub(crate) limit: usize,

    /// Send `adlt=off` when true, `adlt=on` otherwise
    pub(crate) adult_filter_off: bool,

    /// Timeout in seconds applied to every page and image request. At least 1.
    pub(crate) timeout_secs: u64,

    pub(crate) filter: Option<FilterShorthand>,

    /// Exact `(width, height)` to resize every image to before saving.
    /// Resized images are re-encoded as PNG.
    pub(crate) resize: Option<(u32, u32)>,

    /// Log per-page and per-image progress at info level
    pub(crate) verbose: bool,

    pub(crate) country: String,
    pub(crate) theme: String,

    /// `count` hint sent with each page request.
    /// Defaults to `limit` when unset.
    pub(crate) page_size_hint: Option<usize>,

    pub(crate) search_endpoint: String,

    /// Write a JSON side-car next to each saved image
    pub(crate) save_metadata: bool,

    /// Maximum accepted size of one image download in bytes
    pub(crate) max_image_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dataset"),
            query: String::new(),
            limit: DEFAULT_LIMIT,
            adult_filter_off: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            filter: None,
            resize: None,
            verbose: true,
            country: UNKNOWN_SCOPE.to_string(),
            theme: UNKNOWN_SCOPE.to_string(),
            page_size_hint: None,
            search_endpoint: SEARCH_ENDPOINT.to_string(),
            save_metadata: true,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}
