//! Where layout text comes from.
//!
//! The engine only depends on the [`LayoutSource`] trait; hosts decide
//! whether layouts live on disk, in memory, or behind a network fetch. The
//! conventional arrangement mirrors the original deployment: a local
//! directory first, a remote mirror as the one fallback.

use crate::klc::{decode_layout_bytes, KlcError};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("layout not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("layout decode error: {0}")]
    Decode(#[from] KlcError),
}

/// Supplies raw layout text for a configured language file name (without
/// the `.klc` extension).
pub trait LayoutSource {
    fn fetch_layout_text(&self, file_name: &str) -> Result<String, SourceError>;
}

/// Layout files in a directory, `<dir>/<file_name>.klc`, BOM-aware.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl LayoutSource for DirectorySource {
    fn fetch_layout_text(&self, file_name: &str) -> Result<String, SourceError> {
        let path = self.dir.join(format!("{file_name}.klc"));
        if !path.is_file() {
            return Err(SourceError::NotFound(file_name.to_string()));
        }
        let bytes = std::fs::read(&path)?;
        Ok(decode_layout_bytes(&bytes)?)
    }
}

/// Layouts held in memory; used by tests and by hosts that bundle their
/// layouts statically.
#[derive(Default)]
pub struct InMemorySource {
    layouts: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.layouts.insert(file_name.into(), text.into());
    }
}

impl LayoutSource for InMemorySource {
    fn fetch_layout_text(&self, file_name: &str) -> Result<String, SourceError> {
        self.layouts
            .get(file_name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(file_name.to_string()))
    }
}

/// Tries a primary source, then at most one secondary. A primary miss is
/// expected and logged at debug level; the secondary's error is final.
pub struct FallbackSource {
    primary: Box<dyn LayoutSource>,
    secondary: Option<Box<dyn LayoutSource>>,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn LayoutSource>, secondary: Option<Box<dyn LayoutSource>>) -> Self {
        Self { primary, secondary }
    }
}

impl LayoutSource for FallbackSource {
    fn fetch_layout_text(&self, file_name: &str) -> Result<String, SourceError> {
        match self.primary.fetch_layout_text(file_name) {
            Ok(text) => Ok(text),
            Err(primary_err) => match &self.secondary {
                Some(secondary) => {
                    log::debug!("primary source missed {file_name:?}: {primary_err}");
                    secondary.fetch_layout_text(file_name)
                }
                None => Err(primary_err),
            },
        }
    }
}
