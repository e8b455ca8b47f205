//! Command-line interface definitions for the OG image fetcher.
//!
//! Every option has a default, so running the binary with no arguments
//! resolves the built-in article list and writes `data/og-images.json` next to
//! the crate manifest.

use clap::Parser;

/// Output file used when `--output` is not given.
///
/// Resolved at build time: it points into the source checkout the binary
/// was compiled from.
pub const DEFAULT_OUTPUT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/og-images.json");

/// User-Agent sent with every article request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; OGImageFetcher/1.0)";

/// Command-line arguments for the OG image fetcher.
///
/// # Examples
///
/// ```sh
/// # Built-in article list, default output path
/// og_image_fetcher
///
/// # Custom article list and output file
/// og_image_fetcher --articles articles.yaml --output ./og-images.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON file to write (overwritten on every run). The default
    /// is `data/og-images.json` in the source checkout this binary was built
    /// from; pass an explicit path when running an installed binary.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Optional YAML file with an `articles:` list replacing the built-in list
    #[arg(short, long, env = "OG_ARTICLES_FILE")]
    pub articles: Option<String>,

    /// Per-request timeout in seconds, covering connect, headers and body
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}
