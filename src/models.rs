//! Data models for per-article lookups and the persisted image map.
//!
//! - [`LookupOutcome`]: what happened for one article
//! - [`ArticleLookup`]: an article URL paired with its outcome
//! - [`ImageMap`]: article URL to image URL, successes only

use std::collections::BTreeMap;
use std::fmt;

/// Article URL to preview image URL.
///
/// Sorted by key so repeated runs over the same results serialize
/// identically.
pub type ImageMap = BTreeMap<String, String>;

/// Result of resolving a single article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The page declared a preview image.
    Found(String),
    /// The page was fetched but carries neither `og:image` nor `twitter:image`.
    Missing,
    /// The fetch failed; holds the error message.
    Failed(String),
}

/// One article and the outcome of resolving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLookup {
    pub article_url: String,
    pub outcome: LookupOutcome,
}

impl ArticleLookup {
    /// The image URL, if one was found.
    pub fn image_url(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Found(image) => Some(image.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for LookupOutcome {
    /// Console wording for the end of a progress line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(_) => write!(f, "OK"),
            LookupOutcome::Missing | LookupOutcome::Failed(_) => write!(f, "no image found"),
        }
    }
}
