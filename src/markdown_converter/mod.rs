//! Post content to Markdown conversion pipeline
//!
//! Converts the HTML body of one blog-export post into Markdown:
//! 1. Preprocess the raw string (paragraph markers, image paths, "more"
//!    separator, code languages)
//! 2. Convert the parsed tree with htmd plus the blog-export rule set
//! 3. Postprocess the Markdown ("more" separator restore, list marker spacing)
//!
//! # Usage
//!
//! ## Synchronous
//! ```rust
//! # use wxr_markdown::config::ConversionConfig;
//! # use wxr_markdown::markdown_converter::convert_post_content_sync;
//! let raw = "<h2>Hello</h2>\n\nFirst paragraph.\n\nSecond paragraph.";
//! let markdown = convert_post_content_sync(raw, &ConversionConfig::default())?;
//! assert!(markdown.starts_with("## Hello"));
//! # Ok::<(), wxr_markdown::markdown_converter::ConversionError>(())
//! ```
//!
//! ## Asynchronous
//! ```rust
//! # use wxr_markdown::config::ConversionConfig;
//! # use wxr_markdown::markdown_converter::convert_post_content;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let markdown = convert_post_content("<p>Body</p>", &ConversionConfig::default()).await?;
//! assert_eq!(markdown, "Body");
//! # Ok::<(), wxr_markdown::markdown_converter::ConversionError>(())
//! # }).unwrap();
//! ```
//!
//! ## Whole export
//! ```rust
//! # use wxr_markdown::config::ConversionConfig;
//! # use wxr_markdown::markdown_converter::convert_posts;
//! let config = ConversionConfig::builder().rewrite_image_paths(true).build()?;
//! let posts = vec!["<p>One</p>", r#"<img src="https://blog.test/a.png" alt="A">"#];
//! let results = convert_posts(&posts, &config);
//! assert_eq!(results[1].as_deref().ok(), Some("![A](images/a.png)"));
//! # Ok::<(), wxr_markdown::markdown_converter::ConversionError>(())
//! ```

use rayon::prelude::*;
use std::sync::Arc;

pub mod custom_handlers;
pub mod errors;
pub mod html_preprocessing;
pub mod html_to_markdown;
pub mod markdown_postprocessing;
pub(crate) mod node_util;
pub mod rule_registry;

pub use custom_handlers::{shared_rules, wordpress_rules};
pub use errors::{ConversionError, ConversionResult};
pub use html_preprocessing::preprocess;
pub use html_to_markdown::MarkdownConverter;
pub use markdown_postprocessing::{postprocess, restore_more_marker};
pub use rule_registry::{Rule, RuleFilter, RuleRegistry, RuleReplacement};

use crate::config::ConversionConfig;

/// The full pipeline bound to one configuration and rule set
pub struct PostConverter {
    config: ConversionConfig,
    converter: MarkdownConverter,
}

impl PostConverter {
    /// Pipeline using the shared blog-export rule set.
    #[must_use]
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_rules(config, shared_rules())
    }

    /// Pipeline using a caller-supplied rule set.
    #[must_use]
    pub fn with_rules(config: ConversionConfig, rules: Arc<RuleRegistry>) -> Self {
        Self {
            config,
            converter: MarkdownConverter::with_registry(rules),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert one post's raw content to Markdown.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Parse` if the tree converter rejects the
    /// preprocessed fragment.
    pub fn convert(&self, raw: &str) -> ConversionResult<String> {
        let html = preprocess(raw, &self.config);
        tracing::debug!(
            raw_len = raw.len(),
            html_len = html.len(),
            "Preprocessed post content"
        );

        let mut markdown = self.converter.convert(&html)?;
        tracing::debug!(markdown_len = markdown.len(), "Converted post tree");

        if self.config.preserve_more_marker() {
            markdown = restore_more_marker(&markdown);
        }

        if self.config.normalize_list_markers() {
            Ok(postprocess(&markdown))
        } else {
            Ok(markdown)
        }
    }
}

/// Convert one post's raw content to Markdown (blocking).
///
/// # Errors
///
/// See [`PostConverter::convert`].
pub fn convert_post_content_sync(raw: &str, config: &ConversionConfig) -> ConversionResult<String> {
    PostConverter::new(config.clone()).convert(raw)
}

/// Convert one post's raw content to Markdown on the blocking pool.
///
/// # Errors
///
/// Returns `ConversionError::TaskJoin` if the blocking task panics or is
/// cancelled, otherwise the same errors as [`convert_post_content_sync`].
pub async fn convert_post_content(raw: &str, config: &ConversionConfig) -> ConversionResult<String> {
    let raw = Arc::<str>::from(raw);
    let config = config.clone();

    tokio::task::spawn_blocking(move || convert_post_content_sync(&raw, &config)).await?
}

/// Convert a batch of posts in parallel.
///
/// Results come back in input order, one per post, so a single bad post
/// does not abort the batch. Each worker thread builds its own converter
/// over the shared rule set.
pub fn convert_posts<S>(posts: &[S], config: &ConversionConfig) -> Vec<ConversionResult<String>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(posts = posts.len(), "Converting post batch");

    let results: Vec<ConversionResult<String>> = posts
        .par_iter()
        .map_init(
            || PostConverter::new(config.clone()),
            |converter, raw| converter.convert(raw.as_ref()),
        )
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = posts.len(), "Some posts failed to convert");
    }

    results
}
