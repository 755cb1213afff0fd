//! Fluent builder for `ConversionConfig`
//!
//! Every field has a default, so unlike a typestate builder there is no
//! required step; `build()` only validates.

use super::types::ConversionConfig;
use crate::markdown_converter::ConversionResult;

#[derive(Debug, Clone, Default)]
pub struct ConversionConfigBuilder {
    pub(crate) config: ConversionConfig,
}

impl ConversionConfig {
    /// Create a builder for configuring a `ConversionConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

impl ConversionConfigBuilder {
    #[must_use]
    pub fn rewrite_image_paths(mut self, rewrite: bool) -> Self {
        self.config.rewrite_image_paths = rewrite;
        self
    }

    #[must_use]
    pub fn image_folder(mut self, folder: impl Into<String>) -> Self {
        // Stored without trailing separators so the rewrite can always join with '/'
        let folder = folder.into();
        self.config.image_folder = folder.trim().trim_end_matches(['/', '\\']).to_string();
        self
    }

    #[must_use]
    pub fn preserve_more_marker(mut self, preserve: bool) -> Self {
        self.config.preserve_more_marker = preserve;
        self
    }

    #[must_use]
    pub fn normalize_list_markers(mut self, normalize: bool) -> Self {
        self.config.normalize_list_markers = normalize;
        self
    }

    /// Validate and produce the config.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidConfig` if the image folder is empty,
    /// absolute, or contains a quote character.
    pub fn build(self) -> ConversionResult<ConversionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
