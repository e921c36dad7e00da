//! Image search result pages
//!
//! Builds result page requests, fetches the raw markup, and extracts the
//! per-image metadata embedded in it.

pub mod extractor;
pub mod page_source;
pub mod request;
pub mod types;

pub use extractor::extract_images;
pub use page_source::{HttpPageSource, PageFetchError, PageSource};
pub use request::{PageRequest, browser_headers};
pub use types::{ExtractedImage, FilterShorthand, ImageMetadata, ImageRecord, ScopeTags};
