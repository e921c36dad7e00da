//! Result page fetching
//!
//! `PageSource` is the seam between the crawl loop and the search endpoint.
//! `HttpPageSource` is the production implementation; tests drive the engine
//! with in-memory sources.

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::request::PageRequest;

/// Failure to obtain one result page
#[derive(Debug, Error)]
pub enum PageFetchError {
    /// The request URL could not be built
    #[error("Invalid page request: {0}")]
    InvalidRequest(String),

    /// Network error or timeout
    #[error("Failed to fetch result page {page_index}: {source}")]
    Network {
        page_index: usize,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error("Result page {page_index} returned HTTP {status}")]
    HttpStatus { page_index: usize, status: u16 },
}

/// Provider of raw result page markup
pub trait PageSource {
    /// Fetch the markup of one result page
    ///
    /// An empty string is a valid answer and means the endpoint has no more
    /// results.
    fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<String, PageFetchError>> + Send;
}

/// Fetches result pages from the search endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpPageSource {
    /// `client` should carry the browser headers as default headers
    #[must_use]
    pub fn new(client: Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<String, PageFetchError> {
        let url = request
            .to_url(&self.endpoint)
            .map_err(|e| PageFetchError::InvalidRequest(format!("{e:#}")))?;
        let page_index = request.page_index;

        debug!(url = %url, page_index, "Fetching result page");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| PageFetchError::Network { page_index, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageFetchError::HttpStatus {
                page_index,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| PageFetchError::Network { page_index, source })
    }
}
