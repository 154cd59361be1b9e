use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Load target URLs from a JSON file holding an array of strings.
///
/// Every failure here is fatal to the run: a missing or unreadable file,
/// invalid JSON, or any shape other than an array of strings aborts before
/// a single probe is issued.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL file {}", path.display()))?;
    let urls: Vec<String> = serde_json::from_str(&contents)
        .with_context(|| format!("{} must contain a JSON array of URL strings", path.display()))?;
    Ok(urls)
}
