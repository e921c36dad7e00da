//! Type-safe builder for `RunConfig` using the typestate pattern
//!
//! `build()` only exists once both required fields, the output directory and
//! the query, have been provided. Value validation happens in `build()`.

use anyhow::{Result, anyhow, bail};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::RunConfig;
use crate::image_search::FilterShorthand;
use crate::utils::is_valid_scope_tag;

// Type states for the builder
pub struct WithOutputDir;
pub struct WithQuery;

pub struct RunConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) query: Option<String>,
    pub(crate) limit: usize,
    pub(crate) adult_filter_off: bool,
    pub(crate) timeout_secs: u64,
    pub(crate) filter: Option<FilterShorthand>,
    pub(crate) resize: Option<(u32, u32)>,
    pub(crate) verbose: bool,
    pub(crate) country: String,
    pub(crate) theme: String,
    pub(crate) page_size_hint: Option<usize>,
    pub(crate) search_endpoint: String,
    pub(crate) save_metadata: bool,
    pub(crate) max_image_size: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for RunConfigBuilder<()> {
    fn default() -> Self {
        let defaults = RunConfig::default();
        Self {
            output_dir: None,
            query: None,
            limit: defaults.limit,
            adult_filter_off: defaults.adult_filter_off,
            timeout_secs: defaults.timeout_secs,
            filter: defaults.filter,
            resize: defaults.resize,
            verbose: defaults.verbose,
            country: defaults.country,
            theme: defaults.theme,
            page_size_hint: defaults.page_size_hint,
            search_endpoint: defaults.search_endpoint,
            save_metadata: defaults.save_metadata,
            max_image_size: defaults.max_image_size,
            _phantom: PhantomData,
        }
    }
}

impl RunConfig {
    /// Create a builder for configuring a `RunConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> RunConfigBuilder<()> {
        RunConfigBuilder::default()
    }
}

impl<State> RunConfigBuilder<State> {
    /// Move every field into a builder of another state
    fn into_state<Next>(self) -> RunConfigBuilder<Next> {
        RunConfigBuilder {
            output_dir: self.output_dir,
            query: self.query,
            limit: self.limit,
            adult_filter_off: self.adult_filter_off,
            timeout_secs: self.timeout_secs,
            filter: self.filter,
            resize: self.resize,
            verbose: self.verbose,
            country: self.country,
            theme: self.theme,
            page_size_hint: self.page_size_hint,
            search_endpoint: self.search_endpoint,
            save_metadata: self.save_metadata,
            max_image_size: self.max_image_size,
            _phantom: PhantomData,
        }
    }
}

impl RunConfigBuilder<()> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> RunConfigBuilder<WithOutputDir> {
        self.output_dir = Some(dir.into());
        self.into_state()
    }
}

impl RunConfigBuilder<WithOutputDir> {
    pub fn query(mut self, query: impl Into<String>) -> RunConfigBuilder<WithQuery> {
        self.query = Some(query.into());
        self.into_state()
    }
}

// Build method only available when all required fields are set
impl RunConfigBuilder<WithQuery> {
    pub fn build(self) -> Result<RunConfig> {
        let query = self
            .query
            .ok_or_else(|| anyhow!("query is required"))?
            .trim()
            .to_string();
        if query.is_empty() {
            bail!("Search query cannot be empty or whitespace-only");
        }

        if self.limit == 0 {
            bail!("limit must be a positive integer");
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be a positive number of seconds");
        }
        if let Some((width, height)) = self.resize
            && (width == 0 || height == 0)
        {
            bail!("resize dimensions must be positive, got {width}x{height}");
        }
        if self.page_size_hint == Some(0) {
            bail!("page size hint must be positive");
        }
        if self.max_image_size == 0 {
            bail!("max image size must be positive");
        }
        for (name, tag) in [("country", &self.country), ("theme", &self.theme)] {
            if !is_valid_scope_tag(tag) {
                bail!("{name} '{tag}' does not name a usable directory");
            }
        }

        Ok(RunConfig {
            output_dir: self
                .output_dir
                .ok_or_else(|| anyhow!("output_dir is required"))?,
            query,
            limit: self.limit,
            adult_filter_off: self.adult_filter_off,
            timeout_secs: self.timeout_secs,
            filter: self.filter,
            resize: self.resize,
            verbose: self.verbose,
            country: self.country,
            theme: self.theme,
            page_size_hint: self.page_size_hint,
            search_endpoint: self.search_endpoint,
            save_metadata: self.save_metadata,
            max_image_size: self.max_image_size,
        })
    }
}
