//! Error types for image acquisition
//!
//! Every failure carries the URL being acquired and keeps the underlying
//! cause reachable through `source()`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for acquisition operations
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Failure categories for one acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionErrorKind {
    /// Network error, timeout or error status while fetching the image
    TransientFetchFailure,
    /// Fetched bytes are not an image, or could not be transformed
    InvalidImageContent,
    /// Directory creation or file write failed
    FilesystemFailure,
}

/// Error types for image acquisition
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// Request failed before a response arrived, or the body stream broke
    #[error("Failed to download {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Download of {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Response body exceeds the configured size cap
    #[error("Image at {url} too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { url: String, size: u64, limit: usize },

    /// Bytes are not a recognized image, or decoding/resizing failed
    #[error("Invalid image, not saving {url}: {reason}")]
    InvalidImage { url: String, reason: String },

    /// Directory creation or file write failed
    #[error("Filesystem error while saving {url} to {}: {source}", path.display())]
    Filesystem {
        url: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata side-car could not be serialized
    #[error("Failed to serialize metadata for {url}: {source}")]
    Metadata {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AcquisitionError {
    /// URL of the image whose acquisition failed
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Fetch { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::TooLarge { url, .. }
            | Self::InvalidImage { url, .. }
            | Self::Filesystem { url, .. }
            | Self::Metadata { url, .. } => url,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AcquisitionErrorKind {
        match self {
            Self::Fetch { .. } | Self::HttpStatus { .. } => {
                AcquisitionErrorKind::TransientFetchFailure
            }
            Self::TooLarge { .. } | Self::InvalidImage { .. } => {
                AcquisitionErrorKind::InvalidImageContent
            }
            Self::Filesystem { .. } | Self::Metadata { .. } => {
                AcquisitionErrorKind::FilesystemFailure
            }
        }
    }

    /// Check if a later attempt could plausibly succeed
    ///
    /// The crawl loop never retries; this is for callers with their own policy.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the failure was a request timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Fetch { source, .. } if source.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_image_is_not_transient() {
        let err = AcquisitionError::InvalidImage {
            url: "https://x.test/a.jpg".to_string(),
            reason: "unrecognized format".to_string(),
        };
        assert_eq!(err.url(), "https://x.test/a.jpg");
        assert_eq!(err.kind(), AcquisitionErrorKind::InvalidImageContent);
        assert!(!err.is_transient());
        assert!(!err.is_timeout());
    }

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        let server = AcquisitionError::HttpStatus {
            url: "u".to_string(),
            status: 503,
        };
        let missing = AcquisitionError::HttpStatus {
            url: "u".to_string(),
            status: 404,
        };
        assert!(server.is_transient());
        assert!(!missing.is_transient());
        assert_eq!(missing.kind(), AcquisitionErrorKind::TransientFetchFailure);
    }

    #[test]
    fn filesystem_error_keeps_cause() {
        let err = AcquisitionError::Filesystem {
            url: "u".to_string(),
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), AcquisitionErrorKind::FilesystemFailure);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/nope"));
    }
}
