//! Getter methods for `RunConfig`
//!
//! Accessors for configuration values, plus the values derived from them
//! that the crawl loop and the acquirer consume.

use std::path::PathBuf;
use std::time::Duration;

use super::types::RunConfig;
use crate::image_search::{FilterShorthand, PageRequest, ScopeTags};

impl RunConfig {
    #[must_use]
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn adult_filter_off(&self) -> bool {
        self.adult_filter_off
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn filter(&self) -> Option<FilterShorthand> {
        self.filter
    }

    #[must_use]
    pub fn resize(&self) -> Option<(u32, u32)> {
        self.resize
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// `count` hint for page requests, the limit unless set explicitly
    #[must_use]
    pub fn page_size_hint(&self) -> usize {
        self.page_size_hint.unwrap_or(self.limit)
    }

    #[must_use]
    pub fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    #[must_use]
    pub fn save_metadata(&self) -> bool {
        self.save_metadata
    }

    #[must_use]
    pub fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    #[must_use]
    pub fn scope_tags(&self) -> ScopeTags {
        ScopeTags {
            country: self.country.clone(),
            theme: self.theme.clone(),
            query: self.query.clone(),
        }
    }

    /// Request for the result page at `page_index`
    #[must_use]
    pub fn page_request(&self, page_index: usize) -> PageRequest {
        PageRequest {
            query: self.query.clone(),
            page_index,
            count: self.page_size_hint(),
            adult_filter_off: self.adult_filter_off,
            filter: self.filter,
        }
    }
}
