//! # OG Image Fetcher
//!
//! Resolves the social-preview ("Open Graph") image of each article in a list
//! and saves the results as a JSON object mapping article URL to image URL.
//!
//! ## Usage
//!
//! ```sh
//! og_image_fetcher
//! og_image_fetcher --articles articles.yaml --output ./og-images.json
//! ```
//!
//! ## Pipeline
//!
//! 1. **Configure**: build a [`config::RunConfig`] from CLI arguments
//! 2. **Fetch**: request each article in order, one at a time
//! 3. **Extract**: scan the HTML for `og:image`, then `twitter:image`
//! 4. **Output**: write the successes to a pretty-printed JSON file
//!
//! Failed articles are logged and left out of the output; they never abort
//! the run. Only configuration and the final write can fail the process.

use clap::Parser;
use std::error::Error;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod articles;
mod cli;
mod config;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod utils;

use cli::Cli;
use config::RunConfig;
use fetch::HttpFetcher;
use outputs::json;
use pipeline::{collect_images, resolve_articles};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = RunConfig::from_cli(&args)?;
    info!(
        articles = config.articles.len(),
        output = %config.output_path.display(),
        timeout_secs = config.timeout.as_secs(),
        "og_image_fetcher starting up"
    );

    let fetcher = HttpFetcher::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut progress = stdout.lock();
    let lookups = resolve_articles(&config.articles, &fetcher, &mut progress).await?;
    let images = collect_images(&lookups);

    json::write_image_map(&images, &config.output_path).await?;
    writeln!(
        progress,
        "\nSaved {} images to {}",
        images.len(),
        config.output_path.display()
    )?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, saved = images.len(), "Execution complete");

    Ok(())
}
