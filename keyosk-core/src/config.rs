//! Host-facing configuration of a keyboard session.

use crate::engine::ValidationRules;
use serde::{Deserialize, Serialize};

/// Caption used when a language has no usable display name.
pub const LANGUAGE_KEY_DEFAULT: &str = "Language";

const LANGUAGE_MAP_SPLIT_CHAR: char = ':';

/// One configured language: the layout file name and an optional mapped
/// display name, written `fileName[:displayName]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub file_name: String,
    pub display_name: Option<String>,
}

impl LanguageEntry {
    pub fn parse(entry: &str) -> Self {
        let parts: Vec<&str> = entry.split(LANGUAGE_MAP_SPLIT_CHAR).collect();
        match parts.as_slice() {
            [file_name] => Self {
                file_name: file_name.trim().to_string(),
                display_name: None,
            },
            [file_name, display_name] => Self {
                file_name: file_name.trim().to_string(),
                display_name: Some(display_name.trim().to_string()),
            },
            _ => Self {
                file_name: parts.first().unwrap_or(&"").trim().to_string(),
                display_name: Some(LANGUAGE_KEY_DEFAULT.to_string()),
            },
        }
    }

    /// Button caption: the mapped name when present, otherwise the file name
    /// lowercased with its first letter capitalized.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.display_name {
            return name.clone();
        }
        let lower = self.file_name.to_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => LANGUAGE_KEY_DEFAULT.to_string(),
        }
    }
}

/// Session configuration. Pattern rules live in
/// [`ValidationRules`](crate::engine::ValidationRules); everything else here
/// is plain data a host may persist.
#[derive(Debug, Clone, Default)]
pub struct KeyboardConfig {
    pub languages: Vec<LanguageEntry>,
    /// Always render and emit uppercase, regardless of caps lock.
    pub permanent_uppercase: bool,
    /// Show the active language's display name on the language key instead
    /// of the generic caption.
    pub show_selected_language: bool,
    pub rules: ValidationRules,
}

impl KeyboardConfig {
    /// Builds a config from a comma-separated language list, each entry
    /// `fileName[:displayName]`.
    pub fn with_languages(list: &str) -> Self {
        Self {
            languages: list
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(LanguageEntry::parse)
                .collect(),
            ..Default::default()
        }
    }

    /// Caption for the language key with `index` active.
    pub fn language_caption(&self, index: usize) -> String {
        if !self.show_selected_language {
            return LANGUAGE_KEY_DEFAULT.to_string();
        }
        self.languages
            .get(index)
            .map(LanguageEntry::display_name)
            .unwrap_or_else(|| LANGUAGE_KEY_DEFAULT.to_string())
    }
}
