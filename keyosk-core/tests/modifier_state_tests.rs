mod common;

use common::*;
use keyosk_core::{slot_for_scan_code, InMemorySource, KeyOutput, KeyValue, KeyboardConfig, KeyboardSession};
use pretty_assertions::assert_eq;

fn a_slot() -> usize {
    slot_for_scan_code("1e").unwrap()
}

#[test]
fn shift_switches_the_active_table() {
    let mut session = en_session();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0061));

    let output = session.handle_key("shift").unwrap();
    assert_eq!(output, KeyOutput::TableChanged);
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0041));

    session.handle_key("shift").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0061));
}

#[test]
fn shift_then_altgrp_reaches_the_combined_table() {
    let mut session = en_session();
    session.handle_key("shift").unwrap();
    session.handle_key("alt grp").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x00c4));

    // releasing shift falls back to altgrp, not default
    session.handle_key("shift").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x00e4));
}

#[test]
fn altgrp_then_shift_is_symmetric() {
    let mut session = en_session();
    session.handle_key("alt grp").unwrap();
    session.handle_key("shift").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x00c4));

    session.handle_key("alt grp").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0041));
}

#[test]
fn ordinary_presses_clear_single_shot_modifiers() {
    let mut session = en_session();
    session.handle_key("shift").unwrap();
    let output = session.handle_character_key("A");
    assert_eq!(output, KeyOutput::Insert("A".to_string()));
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0061));
}

#[test]
fn caps_lock_uppercases_the_default_table() {
    let mut session = en_session();
    session.handle_key("caps lock").unwrap();
    assert!(session.modifiers().caps_lock());
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0041));

    // caps lock survives character presses
    session.handle_character_key("A");
    assert!(session.modifiers().caps_lock());
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0041));

    session.handle_key("caps lock").unwrap();
    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0061));
}

#[test]
fn caps_lock_does_not_touch_dead_key_caps_without_case() {
    let mut session = en_session();
    session.handle_key("caps lock").unwrap();
    let slot = slot_for_scan_code("28").unwrap();
    // the acute accent has no uppercase form
    assert_eq!(session.active_table()[slot], KeyValue::DeadKey(0x00b4));
}

#[test]
fn permanent_uppercase_applies_without_caps_lock() {
    let mut source = InMemorySource::new();
    source.insert("english", EN_KLC);
    let mut config = KeyboardConfig::with_languages("english");
    config.permanent_uppercase = true;
    let session = KeyboardSession::new(config, Box::new(source)).unwrap();

    assert_eq!(session.active_table()[a_slot()], KeyValue::Single(0x0041));
}

#[test]
fn unknown_long_tokens_are_ignored() {
    let mut session = en_session();
    let output = session.handle_key("bogus key").unwrap();
    assert_eq!(output, KeyOutput::None);
    assert_eq!(session.buffer_text(), "");
}

#[test]
fn ligature_sequences_insert_whole() {
    let mut session = en_session();
    let slot = slot_for_scan_code("2b").unwrap();
    let value = session.active_table()[slot].clone();
    assert_eq!(value, KeyValue::Sequence(vec![0x0041, 0x0042]));

    // the host resolves the sequence to text and sends it as one press
    let output = session.handle_character_key(&value.emitted_text());
    assert_eq!(output, KeyOutput::Insert("AB".to_string()));
    assert_eq!(session.buffer_text(), "AB");
}
