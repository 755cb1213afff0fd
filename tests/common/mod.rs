//! Test utilities shared by the conversion test suites

use std::sync::Once;
use wxr_markdown::config::ConversionConfig;
use wxr_markdown::markdown_converter::convert_post_content_sync;

static TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG=wxr_markdown=trace` shows rule hits.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Convert with the default configuration.
#[allow(dead_code)]
pub fn convert(raw: &str) -> String {
    init_tracing();
    convert_post_content_sync(raw, &ConversionConfig::default())
        .unwrap_or_else(|e| panic!("conversion failed: {e}"))
}

/// Convert with image path rewriting enabled.
#[allow(dead_code)]
pub fn convert_with_images(raw: &str) -> String {
    init_tracing();
    let config = ConversionConfig::builder()
        .rewrite_image_paths(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid config: {e}"));
    convert_post_content_sync(raw, &config).unwrap_or_else(|e| panic!("conversion failed: {e}"))
}

/// Split Markdown into trimmed, non-empty blocks.
#[allow(dead_code)]
pub fn blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}
