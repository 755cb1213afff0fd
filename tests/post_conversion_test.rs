//! End-to-end conversion of blog-export post bodies.

mod common;

use common::{blocks, convert, convert_with_images};
use wxr_markdown::config::ConversionConfig;
use wxr_markdown::markdown_converter::{ConversionError, convert_post_content_sync, convert_posts};

#[test]
fn test_blank_lines_become_paragraphs() {
    let md = convert("Intro line.\n\nMiddle with <em>style</em>.\n\nClosing line.");
    let paragraphs = blocks(&md);
    assert_eq!(paragraphs.len(), 3, "Got: {md:?}");
    assert_eq!(paragraphs[0], "Intro line.");
    assert!(paragraphs[1].starts_with("Middle with"));
    assert_eq!(paragraphs[2], "Closing line.");
}

#[test]
fn test_crlf_blank_lines_become_paragraphs() {
    let md = convert("One.\r\n\r\nTwo.");
    assert_eq!(blocks(&md), vec!["One.", "Two."]);
}

#[test]
fn test_markers_never_leak_into_output() {
    let md = convert("a\n\nb\n\n<p>c</p>\n\nd");
    assert!(!md.contains("<div"), "Got: {md}");
}

#[test]
fn test_image_paths_rewritten_for_known_extensions() {
    let md = convert_with_images(
        r#"<p><img src="https://blog.test/wp-content/uploads/2020/01/foo.png" alt="Foo"></p>"#,
    );
    assert_eq!(md, "![Foo](images/foo.png)");
}

#[test]
fn test_image_paths_kept_for_unknown_extensions() {
    let md = convert_with_images(r#"<p><img src="https://blog.test/up/foo.bmp" alt="Bar"></p>"#);
    assert!(md.contains("https://blog.test/up/foo.bmp"), "Got: {md}");
    assert!(!md.contains("images/foo.bmp"), "Got: {md}");
}

#[test]
fn test_image_paths_untouched_by_default() {
    let md = convert(r#"<img src="https://blog.test/up/foo.png" alt="Foo">"#);
    assert!(md.contains("https://blog.test/up/foo.png"), "Got: {md}");
}

#[test]
fn test_custom_image_folder() {
    let config = ConversionConfig::builder()
        .rewrite_image_paths(true)
        .image_folder("static/media/")
        .build()
        .unwrap();
    let md = convert_post_content_sync(r#"<img src="/up/Photo.JPG" alt="P">"#, &config).unwrap();
    assert_eq!(md, "![P](static/media/Photo.JPG)");
}

#[test]
fn test_more_marker_survives_as_text() {
    let md = convert("Teaser.\n\n<!--more-->\n\nRest of the post.");
    assert_eq!(md, "Teaser.\n\n&lt;!--more--&gt;\n\nRest of the post.");
}

#[test]
fn test_labelled_more_marker_survives_as_text() {
    let md = convert("<p>Teaser.</p>\n<!--more Continue reading-->\n<p>Rest.</p>");
    assert!(md.contains("&lt;!--more Continue reading--&gt;"), "Got: {md:?}");
    assert!(!md.contains("\\<!--more"), "Got: {md:?}");
    let marker = md.find("&lt;!--more").unwrap();
    assert!(md.find("Teaser.").unwrap() < marker, "Got: {md:?}");
    assert!(marker < md.find("Rest.").unwrap(), "Got: {md:?}");
}

#[test]
fn test_more_marker_dropped_when_not_preserved() {
    let config = ConversionConfig::builder().preserve_more_marker(false).build().unwrap();
    let md = convert_post_content_sync("Teaser.\n\n<!--more-->\n\nRest.", &config).unwrap();
    assert!(!md.contains("more"), "Got: {md}");
}

#[test]
fn test_video_embeds() {
    let embed = |url: &str| {
        format!(
            "<figure class=\"wp-block-embed is-type-video is-provider-youtube wp-block-embed-youtube\"><div class=\"wp-block-embed__wrapper\">\n{url}\n</div></figure>"
        )
    };

    let md = convert(&embed("https://www.youtube.com/watch?v=ABC123&feature=x"));
    assert!(md.contains(r#"src="https://www.youtube.com/embed/ABC123""#), "Got: {md}");
    assert!(md.starts_with("<iframe"), "Got: {md}");

    let md = convert(&embed("https://youtu.be/XYZ789?t=5"));
    assert!(md.contains(r#"src="https://www.youtube.com/embed/XYZ789""#), "Got: {md}");

    let md = convert(&embed("https://example.com/video"));
    assert!(!md.contains("<iframe"), "Got: {md}");
    assert!(md.contains("https://example.com/video"), "Got: {md}");
}

#[test]
fn test_figure_with_and_without_caption() {
    let md = convert(r#"<figure class="wp-block-image"><img src="a.png" alt="A"></figure>"#);
    assert_eq!(md, "![A](a.png)");

    let md = convert(
        r#"<figure class="wp-block-image"><img src="a.png" alt="A"><figcaption>Caption text</figcaption></figure>"#,
    );
    assert_eq!(
        md,
        "<figure>\n\n![A](a.png)\n\n<figcaption>\n\nCaption text\n\n</figcaption>\n\n</figure>"
    );
    assert!(!md.contains("\n\n\n"));
}

#[test]
fn test_pre_language_fence() {
    let md = convert(
        "<!-- wp:code {\"language\":\"python\"} -->\n<pre class=\"wp-block-code\">def f():\n    return 1</pre>\n<!-- /wp:code -->",
    );
    assert!(md.contains("```python\ndef f():\n    return 1\n```"), "Got: {md}");
}

#[test]
fn test_pre_with_code_left_to_baseline() {
    let md = convert(r#"<pre data-code-language="python"><code>x = 1</code></pre>"#);
    assert!(md.contains("x = 1"), "Got: {md}");
    assert!(!md.contains("```python"), "Got: {md}");
}

#[test]
fn test_embed_boolean_attributes() {
    let md = convert(
        "<blockquote class=\"twitter-tweet\"><p>Hi</p></blockquote>\n<script async src=\"https://platform.twitter.com/widgets.js\" charset=\"utf-8\"></script>",
    );
    assert!(
        md.contains(r#"<script async src="https://platform.twitter.com/widgets.js" charset="utf-8"></script>"#),
        "Got: {md}"
    );

    let md = convert(r#"<iframe src="https://player.test/1" allowfullscreen></iframe>"#);
    assert_eq!(md, r#"<iframe src="https://player.test/1" allowfullscreen></iframe>"#);
}

#[test]
fn test_list_markers_single_space() {
    let md = convert("<ul><li>alpha</li><li>beta</li></ul>\n\n<ol><li>one</li><li>two</li></ol>");
    for line in md.lines().filter(|l| !l.trim().is_empty()) {
        let rest = line
            .trim_start()
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .trim_start_matches(['-', '.']);
        assert!(rest.starts_with(' ') && !rest.starts_with("  "), "Line: {line:?}");
    }
}

#[test]
fn test_table_figure_with_caption() {
    let md = convert(
        r#"<figure class="wp-block-table"><table><thead><tr><th>Lang</th><th>Year</th></tr></thead><tbody><tr><td>Rust</td><td>2015</td></tr></tbody></table><figcaption>Release years</figcaption></figure>"#,
    );
    assert!(md.contains('|'), "Got: {md}");
    assert!(md.contains("Rust"), "Got: {md}");
    assert!(md.contains("<figcaption>\n\nRelease years\n\n</figcaption>"), "Got: {md}");
    assert!(!md.contains("<figure>"), "Got: {md}");
}

#[test]
fn test_batch_conversion_reports_per_post() {
    let posts = ["<p>first</p>", "second\n\nthird", ""];
    let results = convert_posts(&posts, &ConversionConfig::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_deref().unwrap(), "first");
    assert_eq!(blocks(results[1].as_deref().unwrap()), vec!["second", "third"]);
    assert_eq!(results[2].as_deref().unwrap(), "");
}

#[test]
fn test_invalid_json_config_rejected() {
    let err = ConversionConfig::from_json(r#"{"image_folder": "/abs"}"#).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidConfig(_)));
}
