//! Configuration module for image crawl runs
//!
//! This module provides the `RunConfig` struct and its type-safe builder
//! for configuring crawl runs with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{RunConfigBuilder, WithOutputDir, WithQuery};
pub use types::RunConfig;
