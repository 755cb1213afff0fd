//! Local image path rewriting
//!
//! When the caller saves scraped images next to the post, every `<img>`
//! reference has to point at the saved copy. Only the final path component
//! is kept and prefixed with the image folder:
//!
//! `<img src="https://blog.example/wp-content/uploads/2020/01/cat.png" alt="">`
//! becomes `<img src="images/cat.png" alt="">`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::utils::REWRITABLE_IMAGE_EXTENSIONS;

// Group 1: tag up to and including `src="`
// Group 2: final path component with a known image extension
// Group 3: closing quote and the rest of the tag
// The lazy prefix is confined to `[^"]` so a match never leaves the src value.
static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    let extensions = REWRITABLE_IMAGE_EXTENSIONS.join("|");
    Regex::new(&format!(
        r#"(?i)(<img\b[^>]*?\ssrc=")[^"]*?([^/"]+\.(?:{extensions}))("[^>]*>)"#
    ))
    .expect("IMG_SRC_RE: hardcoded regex is valid")
});

/// Point every eligible `<img>` src at `<folder>/<filename>`.
///
/// Sources whose filename does not end in a rewritable extension are left
/// byte-for-byte unchanged, as is everything outside the src value.
pub fn rewrite_image_paths(html: &str, folder: &str) -> String {
    let folder = folder.trim_end_matches('/');
    IMG_SRC_RE
        .replace_all(html, |caps: &Captures| {
            tracing::trace!(filename = &caps[2], "rewriting image path");
            format!("{}{}/{}{}", &caps[1], folder, &caps[2], &caps[3])
        })
        .into_owned()
}
