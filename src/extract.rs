//! Preview image extraction from raw HTML.
//!
//! This is a textual scan, not a markup parse. Two tiers are tried in order:
//!
//! 1. `<meta property="og:image" content="...">` (either attribute order)
//! 2. `<meta name="twitter:image" content="...">` (either attribute order)
//!
//! Matching is case-insensitive and accepts single or double quotes. The first
//! match wins and its `content` value is returned as-is, with no entity
//! decoding or URL resolution.

use once_cell::sync::Lazy;
use regex::Regex;

static OG_IMAGE_PROPERTY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*property=["']og:image["'][^>]*content=["']([^"']+)["']"#)
        .unwrap()
});

static OG_IMAGE_CONTENT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*property=["']og:image["']"#)
        .unwrap()
});

static TWITTER_IMAGE_NAME_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name=["']twitter:image["'][^>]*content=["']([^"']+)["']"#)
        .unwrap()
});

static TWITTER_IMAGE_CONTENT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*name=["']twitter:image["']"#)
        .unwrap()
});

/// Return the preview image declared by `html`, if any.
///
/// `og:image` always takes precedence over `twitter:image`, regardless of
/// where the tags appear in the document.
pub fn extract_og_image(html: &str) -> Option<String> {
    first_capture(html, &[&*OG_IMAGE_PROPERTY_FIRST, &*OG_IMAGE_CONTENT_FIRST])
        .or_else(|| {
            first_capture(html, &[&*TWITTER_IMAGE_NAME_FIRST, &*TWITTER_IMAGE_CONTENT_FIRST])
        })
}

fn first_capture(html: &str, patterns: &[&Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
