pub mod config;
pub mod markdown_converter;
pub mod utils;

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use markdown_converter::{
    ConversionError, ConversionResult, MarkdownConverter, PostConverter, Rule, RuleRegistry,
    convert_post_content, convert_post_content_sync, convert_posts, postprocess, preprocess,
    shared_rules, wordpress_rules,
};
