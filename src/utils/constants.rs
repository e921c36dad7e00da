//! Shared configuration constants for imgscrape
//!
//! Default values and fixed protocol constants used throughout the crate,
//! kept in one place to avoid magic numbers in the crawl loop.

/// Absolute page cap for a single run: 50 result pages
///
/// Independent of the requested limit. Stops a run whose query never
/// yields enough unique images from paginating forever.
pub const MAX_PAGES: usize = 50;

/// Default number of images to download per run
pub const DEFAULT_LIMIT: usize = 100;

/// Default per-request timeout in seconds, for page and image fetches alike
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default scope tag for `country` and `theme` when the caller supplies none
pub const UNKNOWN_SCOPE: &str = "unknown";

/// Image search results endpoint
pub const SEARCH_ENDPOINT: &str = "https://www.bing.com/images/search";

/// Maximum size for a single image download (bytes)
///
/// Checked against `Content-Length` before reading and again while
/// streaming, since servers may omit or understate it.
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 50 * 1024 * 1024;

/// Prefix for every saved image file name
pub const IMAGE_FILE_PREFIX: &str = "img_";

/// Suffix for every metadata side-car file name
pub const METADATA_FILE_SUFFIX: &str = "_metadata.json";

/// Subdirectory holding downloaded images inside a `(country, theme)` directory
pub const IMAGES_DIR: &str = "images";

/// Subdirectory holding metadata side-cars inside a `(country, theme)` directory
pub const METADATA_DIR: &str = "metadata";

/// Browser user agent sent with every request
///
/// The search endpoint serves the markup the extractor understands only to
/// clients that look like this desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11";

pub const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const BROWSER_ACCEPT_CHARSET: &str = "ISO-8859-1,utf-8;q=0.7,*;q=0.3";
pub const BROWSER_ACCEPT_ENCODING: &str = "none";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";
