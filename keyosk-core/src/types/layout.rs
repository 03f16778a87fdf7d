use super::keys::KEY_SLOT_COUNT;
use super::klc::{DeadKeyTable, LigatureTable, ShiftStateMap};
use crate::engine::ActiveTable;

/// What one physical key emits for one modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyValue {
    /// No output; the key cap is blank.
    #[default]
    Empty,
    /// A single BMP codepoint.
    Single(u16),
    /// A single codepoint that acts as a dead key (declared `code@`).
    /// Dead behavior is still resolved through the dead-key table at press
    /// time; the variant preserves the layout author's marking.
    DeadKey(u16),
    /// A ligature: one press emits the whole codepoint sequence.
    Sequence(Vec<u16>),
    /// Verbatim text for tokens outside the hex grammar.
    Literal(String),
}

impl KeyValue {
    /// Renders the value as the text a press would emit. `Empty` renders as
    /// an empty string; codepoints outside Unicode scalar range are dropped.
    pub fn emitted_text(&self) -> String {
        match self {
            KeyValue::Empty => String::new(),
            KeyValue::Single(code) | KeyValue::DeadKey(code) => char::from_u32(*code as u32)
                .map(String::from)
                .unwrap_or_default(),
            KeyValue::Sequence(codes) => codes
                .iter()
                .filter_map(|&c| char::from_u32(c as u32))
                .collect(),
            KeyValue::Literal(text) => text.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyValue::Empty)
    }

    /// Uppercased rendition for caps-lock presentation. Only values whose
    /// uppercase form is still a single codepoint change; everything else is
    /// returned as-is.
    pub fn to_uppercase(&self) -> KeyValue {
        fn upper_single(code: u16) -> Option<u16> {
            let ch = char::from_u32(code as u32)?;
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) if (u as u32) <= u16::MAX as u32 => Some(u as u16),
                _ => None,
            }
        }
        match self {
            KeyValue::Single(code) => upper_single(*code)
                .map(KeyValue::Single)
                .unwrap_or_else(|| self.clone()),
            KeyValue::DeadKey(code) => upper_single(*code)
                .map(KeyValue::DeadKey)
                .unwrap_or_else(|| self.clone()),
            KeyValue::Literal(text) if text.chars().count() == 1 => {
                let upper: String = text.chars().flat_map(char::to_uppercase).collect();
                if upper.chars().count() == 1 {
                    KeyValue::Literal(upper)
                } else {
                    self.clone()
                }
            }
            other => other.clone(),
        }
    }
}

/// One physical key's four possible outputs. Each field is resolved
/// independently; selecting one never consults another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEntry {
    pub default: KeyValue,
    pub shift: KeyValue,
    pub altgrp: KeyValue,
    pub shift_altgrp: KeyValue,
}

impl KeyEntry {
    pub fn value(&self, table: ActiveTable) -> &KeyValue {
        match table {
            ActiveTable::Default => &self.default,
            ActiveTable::Shift => &self.shift,
            ActiveTable::AltGrp => &self.altgrp,
            ActiveTable::ShiftAltGrp => &self.shift_altgrp,
        }
    }
}

/// Immutable product of parsing one layout file: the lookup tables the
/// keystroke resolver consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDefinition {
    pub locale_name: String,
    pub shift_states: ShiftStateMap,
    pub dead_keys: DeadKeyTable,
    pub ligatures: LigatureTable,
    /// Fixed physical-position table; slot 0 is hardware scan code `29`.
    pub key_slots: [KeyEntry; KEY_SLOT_COUNT],
}

impl LayoutDefinition {
    /// Looks up the dead-key follower map for a codepoint, if that codepoint
    /// is a dead key in this layout.
    pub fn dead_key(&self, code: u16) -> Option<&std::collections::HashMap<u16, u16>> {
        self.dead_keys.get(&code)
    }
}
