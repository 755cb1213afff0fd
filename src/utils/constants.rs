//! Shared constants for post conversion
//!
//! Default values and fixed markup used throughout the codebase to ensure
//! consistency and avoid magic strings.

/// Default folder segment prefixed to rewritten image filenames.
///
/// Matches the relative folder the export tooling saves scraped images into,
/// so `<img src=".../2020/01/foo.png">` becomes `<img src="images/foo.png">`.
pub const DEFAULT_IMAGE_FOLDER: &str = "images";

/// Image extensions eligible for path rewriting (matched case-insensitively).
pub const REWRITABLE_IMAGE_EXTENSIONS: &[&str] = &["gif", "jpg", "jpeg", "png", "webp"];

/// Attribute injected onto `<pre>` tags carrying a block-editor language hint.
pub const CODE_LANGUAGE_ATTR: &str = "data-code-language";

/// Inert block element inserted between blank-line separated runs of text.
pub const PARAGRAPH_MARKER: &str = "<div></div>";

/// Class marking an embedded tweet blockquote.
pub const TWEET_CLASS: &str = "twitter-tweet";

/// Class marking a CodePen embed container.
pub const CODEPEN_CLASS: &str = "codepen";

/// Attribute every CodePen embed container carries.
pub const CODEPEN_SLUG_ATTR: &str = "data-slug-hash";

/// Class marking a block-editor table figure.
pub const TABLE_FIGURE_CLASS: &str = "wp-block-table";

/// Class marking a block-editor YouTube embed figure.
pub const YOUTUBE_FIGURE_CLASS: &str = "wp-block-embed-youtube";

/// Class of the element holding the embed URL inside an embed figure.
pub const EMBED_WRAPPER_CLASS: &str = "wp-block-embed__wrapper";

/// Embed URL prefix for YouTube players.
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
