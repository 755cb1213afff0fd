//! Getter methods for `ConversionConfig`

use super::types::ConversionConfig;

impl ConversionConfig {
    #[must_use]
    pub fn rewrite_image_paths(&self) -> bool {
        self.rewrite_image_paths
    }

    #[must_use]
    pub fn image_folder(&self) -> &str {
        &self.image_folder
    }

    #[must_use]
    pub fn preserve_more_marker(&self) -> bool {
        self.preserve_more_marker
    }

    #[must_use]
    pub fn normalize_list_markers(&self) -> bool {
        self.normalize_list_markers
    }
}
