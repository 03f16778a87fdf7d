//! Per-field edit validation: length, numeric bounds, and pattern rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kind of input field being edited. Pattern rules are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Password,
    Search,
    Tel,
    Url,
}

/// Constraints captured from the focused field.
#[derive(Debug, Clone, Default)]
pub struct FieldConstraints {
    pub field_type: FieldType,
    pub max_length: Option<usize>,
    /// Lower bound, number fields only.
    pub min: Option<f64>,
    /// Upper bound, number fields only.
    pub max: Option<f64>,
}

impl FieldConstraints {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            field_type: FieldType::Number,
            max_length: None,
            min,
            max,
        }
    }
}

/// Pattern tables validating edits: `key_character` is applied to the text a
/// press emits, `field` to the whole buffer after insertion. Field types
/// without an entry accept everything.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub key_character: HashMap<FieldType, Regex>,
    pub field: HashMap<FieldType, Regex>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        fn pattern(source: &str) -> Regex {
            // all sources here are fixed literals
            Regex::new(source).expect("built-in pattern is valid")
        }
        let mut key_character = HashMap::new();
        key_character.insert(FieldType::Number, pattern(r"[0-9]|[eE]|\.|\+|-"));
        key_character.insert(FieldType::Tel, pattern(r"[0-9]|\.|\+|-|#|\(|\)"));
        let mut field = HashMap::new();
        field.insert(
            FieldType::Number,
            pattern(r"^(-)?(((\d+)|(\d+\.(\d+)?)|(\.(\d+)?))([eE]([-+])?(\d+)?)?)?$"),
        );
        Self {
            key_character,
            field,
        }
    }
}

impl ValidationRules {
    /// Whether inserting `emission` (producing `candidate` as the new buffer
    /// content) is allowed under `constraints`.
    pub fn allows(&self, constraints: &FieldConstraints, emission: &str, candidate: &str) -> bool {
        if let Some(max_length) = constraints.max_length {
            if candidate.chars().count() > max_length {
                return false;
            }
        }

        if constraints.field_type == FieldType::Number {
            // an unparseable candidate is left to the field pattern
            if let Ok(value) = candidate.parse::<f64>() {
                if constraints.max.is_some_and(|max| value > max) {
                    return false;
                }
                if constraints.min.is_some_and(|min| value < min) {
                    return false;
                }
            }
        }

        if let Some(pattern) = self.key_character.get(&constraints.field_type) {
            if !pattern.is_match(emission) {
                return false;
            }
        }

        if let Some(pattern) = self.field.get(&constraints.field_type) {
            if !pattern.is_match(candidate) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_accept_anything_by_default() {
        let rules = ValidationRules::default();
        assert!(rules.allows(&FieldConstraints::text(), "é", "café"));
    }

    #[test]
    fn max_length_bounds_the_candidate() {
        let rules = ValidationRules::default();
        let constraints = FieldConstraints {
            max_length: Some(3),
            ..Default::default()
        };
        assert!(rules.allows(&constraints, "c", "abc"));
        assert!(!rules.allows(&constraints, "d", "abcd"));
    }

    #[test]
    fn number_fields_reject_letters_and_out_of_range_values() {
        let rules = ValidationRules::default();
        let constraints = FieldConstraints::number(Some(0.0), Some(100.0));
        assert!(rules.allows(&constraints, "7", "97"));
        assert!(!rules.allows(&constraints, "a", "9a"));
        assert!(!rules.allows(&constraints, "7", "997"));
        assert!(!rules.allows(&constraints, "-", "-3"));
    }

    #[test]
    fn partial_scientific_notation_is_tolerated() {
        // "1e" does not parse as f64, so only the field pattern judges it
        let rules = ValidationRules::default();
        let constraints = FieldConstraints::number(Some(0.0), Some(10.0));
        assert!(rules.allows(&constraints, "e", "1e"));
        // once the exponent completes, the numeric bound applies again
        assert!(!rules.allows(&constraints, "2", "1e2"));
    }
}
