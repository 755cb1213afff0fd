//! Markdown cleanup applied after tree conversion.

mod code_fence_detection;
mod list_markers;
mod more_marker;


pub use code_fence_detection::{CodeFence, FenceTracker, detect_code_fence};
pub use list_markers::normalize_list_marker_spacing;
pub use more_marker::restore_more_marker;

/// Run every postprocessing pass over converted Markdown.
///
/// Idempotent: running it on its own output changes nothing.
pub fn postprocess(markdown: &str) -> String {
    normalize_list_marker_spacing(markdown)
}
