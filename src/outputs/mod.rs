//! Output generation.
//!
//! - [`json`]: writes the article-to-image map consumed by the site build

pub mod json;
