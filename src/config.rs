//! Run configuration.
//!
//! [`RunConfig`] is everything the pipeline needs for one pass: which
//! articles to resolve, how to fetch them and where to write the result.

use crate::articles::default_articles;
use crate::cli::Cli;
use itertools::Itertools;
use serde::Deserialize;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Configuration for a single fetch-and-write pass.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Article URLs in processing order, without duplicates.
    pub articles: Vec<String>,
    /// Destination of the JSON mapping.
    pub output_path: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

/// Shape of an `--articles` YAML file.
///
/// ```yaml
/// articles:
///   - https://www.asimov.press/p/leeches
///   - https://longnow.org/ideas/pantone-02123/
/// ```
#[derive(Debug, Deserialize)]
struct ArticleFile {
    articles: Vec<String>,
}

impl RunConfig {
    /// Build the configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if an article file was given and cannot be read or
    /// parsed.
    #[instrument(level = "info", skip_all)]
    pub fn from_cli(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let articles = match &cli.articles {
            Some(path) => load_article_file(path)?,
            None => default_articles(),
        };

        Ok(Self {
            articles: dedupe_articles(articles),
            output_path: PathBuf::from(&cli.output),
            timeout: Duration::from_secs(cli.timeout_secs),
            user_agent: cli.user_agent.clone(),
        })
    }
}

/// Read an article list from a YAML file.
#[instrument(level = "info", skip_all, fields(%path))]
pub fn load_article_file(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let file: ArticleFile = serde_yaml::from_str(&raw)?;
    info!(count = file.articles.len(), "Loaded article list");
    Ok(file.articles)
}

/// Trim entries, drop blanks and keep the first occurrence of each URL.
pub fn dedupe_articles(articles: Vec<String>) -> Vec<String> {
    let before = articles.len();
    let deduped: Vec<String> = articles
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unique()
        .collect();

    if deduped.len() != before {
        warn!(before, after = deduped.len(), "Dropped blank or duplicate article URLs");
    }
    deduped
}
