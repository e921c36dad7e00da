//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::RunConfigBuilder;
use crate::image_search::FilterShorthand;

impl<State> RunConfigBuilder<State> {
    /// Stop after this many successful downloads
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Turn the search engine's adult filter off (`true`, default) or on
    #[must_use]
    pub fn adult_filter_off(mut self, off: bool) -> Self {
        self.adult_filter_off = off;
        self
    }

    /// Timeout for each page and image request, in seconds
    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Select a result filter by shorthand token
    ///
    /// Accepts `line`, `linedrawing`, `photo`, `clipart`, `gif`,
    /// `animatedgif` and `transparent`. Anything else clears the filter.
    ///
    /// # Example
    /// ```rust
    /// # use imgscrape::config::RunConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = RunConfig::builder()
    ///     .output_dir("./dataset")
    ///     .query("lighthouse")
    ///     .filter("linedrawing")
    ///     .build()?;
    /// assert!(config.filter().is_some());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn filter(mut self, shorthand: &str) -> Self {
        self.filter = FilterShorthand::from_shorthand(shorthand);
        self
    }

    #[must_use]
    pub fn filter_shorthand(mut self, filter: Option<FilterShorthand>) -> Self {
        self.filter = filter;
        self
    }

    /// Resize every image to exactly `width` x `height` and save it as PNG
    #[must_use]
    pub fn resize(mut self, dimensions: Option<(u32, u32)>) -> Self {
        self.resize = dimensions;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scope tag recorded on every image and used as the first directory level
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Scope tag recorded on every image and used as the second directory level
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Results-per-page hint sent as `count`. Defaults to the limit.
    #[must_use]
    pub fn page_size_hint(mut self, hint: usize) -> Self {
        self.page_size_hint = Some(hint);
        self
    }

    /// Override the search endpoint URL
    #[must_use]
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn save_metadata(mut self, save: bool) -> Self {
        self.save_metadata = save;
        self
    }

    #[must_use]
    pub fn max_image_size(mut self, bytes: usize) -> Self {
        self.max_image_size = bytes;
        self
    }
}
