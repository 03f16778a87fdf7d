//! Builds the fixed 47-slot key table from parsed layout data.

use crate::types::{
    slot_for_scan_code, KeyEntry, KeyRow, KeyValue, KlcFile, LayoutDefinition, LigatureTable,
    RawValue, ShiftState, ShiftStateMap, KEY_SLOT_COUNT,
};
use std::collections::HashMap;

/// Maps every physical key position to its four resolved outputs.
///
/// Positions without a matching row, and modifier combinations without a
/// declared column, resolve to `KeyValue::Empty`. Each slot depends only on
/// its own row plus the shift-state and ligature tables.
pub fn build_key_slots(
    rows: &[KeyRow],
    shift_states: &ShiftStateMap,
    ligatures: &LigatureTable,
) -> [KeyEntry; KEY_SLOT_COUNT] {
    let mut by_slot: HashMap<usize, &KeyRow> = HashMap::new();
    for row in rows {
        if let Some(slot) = slot_for_scan_code(&row.scan_code) {
            // a later row for the same scan code wins
            by_slot.insert(slot, row);
        }
    }

    std::array::from_fn(|slot| match by_slot.get(&slot) {
        Some(&row) => KeyEntry {
            default: resolve(row, shift_states.column(ShiftState::Default), ligatures),
            shift: resolve(row, shift_states.column(ShiftState::Shift), ligatures),
            altgrp: resolve(row, shift_states.column(ShiftState::AltGrp), ligatures),
            shift_altgrp: resolve(row, shift_states.column(ShiftState::ShiftAltGrp), ligatures),
        },
        None => KeyEntry::default(),
    })
}

/// Resolve one value column of a row. `column` is the 1-based index declared
/// by the SHIFTSTATE section; `None` (undeclared combination) and columns
/// past the row's width are both Empty.
fn resolve(row: &KeyRow, column: Option<usize>, ligatures: &LigatureTable) -> KeyValue {
    let raw = match column.and_then(|c| c.checked_sub(1)).and_then(|c| row.values.get(c)) {
        Some(raw) => raw,
        None => return KeyValue::Empty,
    };
    match raw {
        RawValue::Empty => KeyValue::Empty,
        RawValue::Code(code) => KeyValue::Single(*code),
        RawValue::DeadCode(code) => KeyValue::DeadKey(*code),
        RawValue::Literal(text) => KeyValue::Literal(text.clone()),
        RawValue::LigatureMarker => match ligatures.get(&row.virtual_key) {
            Some(sequence) => KeyValue::Sequence(sequence.clone()),
            None => KeyValue::Empty,
        },
    }
}

impl LayoutDefinition {
    /// Assembles the immutable layout from a parsed file.
    pub fn from_klc(file: KlcFile) -> Self {
        let key_slots = build_key_slots(&file.rows, &file.shift_states, &file.ligatures);
        LayoutDefinition {
            locale_name: file.locale_name,
            shift_states: file.shift_states,
            dead_keys: file.dead_keys,
            ligatures: file.ligatures,
            key_slots,
        }
    }

    /// Parse layout text and build the key table in one step.
    pub fn parse(text: &str) -> crate::klc::Result<Self> {
        Ok(Self::from_klc(crate::klc::KlcParser::parse(text)?))
    }
}
