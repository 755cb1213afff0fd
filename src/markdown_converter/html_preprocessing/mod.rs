//! String-level rewrites applied to raw post content before tree conversion.
//!
//! Each stage fixes something the parser or the tree walker would otherwise
//! lose. Order matters:
//! 1. `insert_paragraph_markers` - keep blank-line paragraph breaks
//! 2. `rewrite_image_paths` - point images at saved copies (opt-in)
//! 3. `escape_more_marker` - keep the excerpt separator as text
//! 4. `annotate_code_languages` - move language hints onto `<pre>` tags

mod code_language;
mod image_paths;
mod more_marker;
mod paragraph_markers;

pub use code_language::annotate_code_languages;
pub use image_paths::rewrite_image_paths;
pub use more_marker::escape_more_marker;
pub use paragraph_markers::insert_paragraph_markers;

use crate::config::ConversionConfig;

/// Run every preprocessing stage enabled by `config`, in order.
///
/// Pure string transformation; never fails.
pub fn preprocess(raw: &str, config: &ConversionConfig) -> String {
    let html = insert_paragraph_markers(raw);

    let html = if config.rewrite_image_paths() {
        rewrite_image_paths(&html, config.image_folder())
    } else {
        html
    };

    let html = if config.preserve_more_marker() {
        escape_more_marker(&html)
    } else {
        html
    };

    annotate_code_languages(&html)
}
