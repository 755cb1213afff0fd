//! Core configuration type for post conversion
//!
//! The outer CLI resolves user choices (wizard answers, flags) into a
//! `ConversionConfig`; the engine only reads it.

use serde::{Deserialize, Serialize};

use crate::markdown_converter::{ConversionError, ConversionResult};
use crate::utils::DEFAULT_IMAGE_FOLDER;

/// Configuration for converting one post's content to Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Rewrite `<img>` sources to point at locally saved copies.
    ///
    /// Set by the caller when scraped images are being written next to the
    /// post, so references must resolve relative to the Markdown file.
    pub(crate) rewrite_image_paths: bool,

    /// Folder segment prefixed to rewritten image filenames.
    ///
    /// **INVARIANT:** non-empty, relative, no trailing slash (enforced by the builder).
    pub(crate) image_folder: String,

    /// Keep the first `<!--more-->` separator as literal (entity-escaped) text.
    pub(crate) preserve_more_marker: bool,

    /// Collapse extra spaces after list markers in the generated Markdown.
    pub(crate) normalize_list_markers: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            rewrite_image_paths: false,
            image_folder: DEFAULT_IMAGE_FOLDER.to_string(),
            preserve_more_marker: true,
            normalize_list_markers: true,
        }
    }
}

impl ConversionConfig {
    /// Load a config serialized by the outer tool.
    ///
    /// Missing fields take their defaults; the result is validated the same
    /// way as [`ConversionConfigBuilder::build`](super::ConversionConfigBuilder::build).
    pub fn from_json(json: &str) -> ConversionResult<Self> {
        let config: ConversionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> ConversionResult<()> {
        let folder = self.image_folder.trim();
        if folder.is_empty() {
            return Err(ConversionError::InvalidConfig(
                "image_folder must not be empty".to_string(),
            ));
        }
        if folder.starts_with('/') || folder.starts_with('\\') {
            return Err(ConversionError::InvalidConfig(format!(
                "image_folder must be relative, got '{folder}'"
            )));
        }
        if folder.contains('"') {
            return Err(ConversionError::InvalidConfig(format!(
                "image_folder must not contain quotes, got '{folder}'"
            )));
        }
        Ok(())
    }
}
