pub use keyosk_core::*;

use anyhow::{Context, Result};
use keyosk_core::klc::decode_layout_bytes;
use std::path::Path;

/// Reads, decodes, and parses a layout file from disk.
pub fn load_layout(path: &Path) -> Result<LayoutDefinition> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading layout file {}", path.display()))?;
    let text = decode_layout_bytes(&bytes)
        .with_context(|| format!("decoding layout file {}", path.display()))?;
    LayoutDefinition::parse(&text)
        .with_context(|| format!("parsing layout file {}", path.display()))
}

/// Builds a single-language session whose source is the layout file's
/// parent directory.
pub fn session_for_file(path: &Path) -> Result<KeyboardSession> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("layout path has no file name")?;
    let config = KeyboardConfig::with_languages(stem);
    let source = DirectorySource::new(dir);
    KeyboardSession::new(config, Box::new(source)).context("creating keyboard session")
}
