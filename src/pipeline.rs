//! Sequential fetch-and-extract pass over the article list.
//!
//! [`resolve_articles`] visits every article in order, one request at a time,
//! and returns an [`ArticleLookup`] per article. Progress is written to the
//! supplied writer (stdout in the binary) as
//!
//! ```text
//!   https://www.asimov.press/p/leeches ... OK
//!   https://longnow.org/ideas/pantone-02123/ ... no image found
//! ```
//!
//! Fetch failures are logged and recorded as [`LookupOutcome::Failed`]; they
//! never stop the pass.

use crate::extract::extract_og_image;
use crate::fetch::FetchPage;
use crate::models::{ArticleLookup, ImageMap, LookupOutcome};
use crate::utils::error_chain;
use std::error::Error;
use std::io::Write;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Resolve the preview image of every article, in order.
///
/// # Errors
///
/// Only write errors on `progress` are returned. Per-article failures are
/// part of the returned outcomes.
#[instrument(level = "info", skip_all, fields(count = articles.len()))]
pub async fn resolve_articles<F, W>(
    articles: &[String],
    fetcher: &F,
    progress: &mut W,
) -> Result<Vec<ArticleLookup>, Box<dyn Error>>
where
    F: FetchPage,
    W: Write,
{
    let t0 = Instant::now();
    writeln!(progress, "Fetching OG images for {} articles...\n", articles.len())?;

    let mut lookups = Vec::with_capacity(articles.len());
    for url in articles {
        write!(progress, "  {url} ... ")?;
        progress.flush()?;

        let outcome = resolve_article(url, fetcher).await;
        writeln!(progress, "{outcome}")?;

        lookups.push(ArticleLookup {
            article_url: url.clone(),
            outcome,
        });
    }

    let found = lookups.iter().filter(|l| l.image_url().is_some()).count();
    let failed = lookups
        .iter()
        .filter(|l| matches!(l.outcome, LookupOutcome::Failed(_)))
        .count();
    info!(
        total = lookups.len(),
        found,
        missing = lookups.len() - found - failed,
        failed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Finished resolving articles"
    );

    Ok(lookups)
}

/// Fetch one article and extract its image.
async fn resolve_article<F: FetchPage>(url: &str, fetcher: &F) -> LookupOutcome {
    match fetcher.fetch(url).await {
        Ok(html) => match extract_og_image(&html) {
            Some(image) => LookupOutcome::Found(image),
            None => LookupOutcome::Missing,
        },
        Err(e) => {
            let reason = error_chain(e.as_ref());
            error!(%url, error = %reason, "Failed: {url} - {reason}");
            LookupOutcome::Failed(reason)
        }
    }
}

/// Keep only the articles that resolved to an image.
pub fn collect_images(lookups: &[ArticleLookup]) -> ImageMap {
    lookups
        .iter()
        .filter_map(|l| l.image_url().map(|image| (l.article_url.clone(), image.to_string())))
        .collect()
}
