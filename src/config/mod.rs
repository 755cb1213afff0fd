//! Configuration module for post conversion
//!
//! This module provides the `ConversionConfig` struct and its builder.
//! The config is resolved by the caller (CLI flags, wizard answers) and
//! passed to the engine per post.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ConversionConfigBuilder;
pub use types::ConversionConfig;
