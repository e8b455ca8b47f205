//! JSON output of the resolved image map.
//!
//! The file is a single object, pretty-printed with two-space indentation and
//! a trailing newline:
//!
//! ```text
//! {
//!   "https://www.asimov.press/p/leeches": "https://substackcdn.com/image/..."
//! }
//! ```
//!
//! Each run replaces the file outright; previous contents are never merged.

use crate::models::ImageMap;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Render an [`ImageMap`] exactly as it is written to disk.
pub fn render_image_map(images: &ImageMap) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(images)?;
    json.push('\n');
    Ok(json)
}

/// Write `images` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = images.len()))]
pub async fn write_image_map(images: &ImageMap, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = render_image_map(images)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote image map");
    Ok(())
}
