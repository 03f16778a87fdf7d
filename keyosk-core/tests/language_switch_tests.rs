mod common;

use common::*;
use keyosk_core::{
    Error, FallbackSource, InMemorySource, KeyOutput, KeyboardConfig, KeyboardSession,
    LayoutSource, SourceError, TextDirection,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;

/// Source wrapper that counts fetches, for cache assertions.
struct CountingSource {
    inner: InMemorySource,
    fetches: Rc<Cell<usize>>,
}

impl LayoutSource for CountingSource {
    fn fetch_layout_text(&self, file_name: &str) -> Result<String, SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        self.inner.fetch_layout_text(file_name)
    }
}

fn bilingual_session() -> KeyboardSession {
    session_with(&[("english", EN_KLC), ("arabic", AR_KLC)])
}

#[test]
fn language_key_advances_and_wraps() {
    let mut session = bilingual_session();
    assert_eq!(session.active_language(), 0);
    assert_eq!(session.layout().locale_name, "en-US");

    let output = session.handle_key("language").unwrap();
    assert_eq!(output, KeyOutput::LanguageChanged(1));
    assert_eq!(session.layout().locale_name, "ar-SA");

    let output = session.handle_key("language").unwrap();
    assert_eq!(output, KeyOutput::LanguageChanged(0));
    assert_eq!(session.layout().locale_name, "en-US");
}

#[test]
fn direction_follows_the_locale() {
    let mut session = bilingual_session();
    assert_eq!(session.text_direction(), TextDirection::Ltr);
    session.select_language(1).unwrap();
    assert_eq!(session.text_direction(), TextDirection::Rtl);
}

#[test]
fn language_switch_resets_modifier_state() {
    let mut session = bilingual_session();
    session.handle_key("shift").unwrap();
    session.handle_character_key("\u{00b4}");
    session.select_language(1).unwrap();

    assert!(!session.modifiers().shift());
    assert_eq!(session.pending_dead_key(), None);
}

#[test]
fn warm_cache_skips_the_source() {
    let fetches = Rc::new(Cell::new(0));
    let mut inner = InMemorySource::new();
    inner.insert("english", EN_KLC);
    inner.insert("arabic", AR_KLC);
    let source = CountingSource {
        inner,
        fetches: Rc::clone(&fetches),
    };

    let config = KeyboardConfig::with_languages("english,arabic");
    let mut session = KeyboardSession::new(config, Box::new(source)).unwrap();
    assert_eq!(fetches.get(), 1);

    session.select_language(1).unwrap();
    assert_eq!(fetches.get(), 2);

    // both layouts are now cached
    session.select_language(0).unwrap();
    session.select_language(1).unwrap();
    assert_eq!(fetches.get(), 2);
}

#[test]
fn secondary_source_covers_primary_misses() {
    let primary = InMemorySource::new();
    let mut secondary = InMemorySource::new();
    secondary.insert("english", EN_KLC);
    let source = FallbackSource::new(Box::new(primary), Some(Box::new(secondary)));

    let config = KeyboardConfig::with_languages("english");
    let session = KeyboardSession::new(config, Box::new(source)).unwrap();
    assert_eq!(session.layout().locale_name, "en-US");
}

#[test]
fn exhausted_sources_keep_the_last_good_layout() {
    // configure a second language the source cannot provide
    let mut source = InMemorySource::new();
    source.insert("english", EN_KLC);
    let config = KeyboardConfig::with_languages("english,missing");
    let mut session = KeyboardSession::new(config, Box::new(source)).unwrap();

    let err = session.select_language(1).unwrap_err();
    assert!(matches!(err, Error::Source(SourceError::NotFound(_))));
    assert_eq!(session.active_language(), 0);
    assert_eq!(session.layout().locale_name, "en-US");
}

#[test]
fn malformed_layout_aborts_the_selection() {
    let mut source = InMemorySource::new();
    source.insert("english", EN_KLC);
    source.insert("broken", "SHIFTSTATE\n0 //Column 1\nLAYOUT\n");
    let config = KeyboardConfig::with_languages("english,broken");
    let mut session = KeyboardSession::new(config, Box::new(source)).unwrap();

    let err = session.select_language(1).unwrap_err();
    assert!(matches!(err, Error::Klc(_)));
    assert_eq!(session.layout().locale_name, "en-US");
}

#[test]
fn stale_loads_are_discarded() {
    let mut session = bilingual_session();

    let stale = session.begin_language_load(1).unwrap();
    let fresh = session.begin_language_load(1).unwrap();

    let err = session.finish_language_load(stale, AR_KLC).unwrap_err();
    assert!(matches!(err, Error::StaleLoad { .. }));
    assert_eq!(session.layout().locale_name, "en-US");

    session.finish_language_load(fresh, AR_KLC).unwrap();
    assert_eq!(session.layout().locale_name, "ar-SA");
}

#[test]
fn unknown_language_index_is_an_error() {
    let mut session = bilingual_session();
    assert!(matches!(
        session.select_language(7),
        Err(Error::UnknownLanguage(7))
    ));
}

#[test]
fn empty_language_list_is_refused() {
    let result = KeyboardSession::new(
        KeyboardConfig::default(),
        Box::new(InMemorySource::new()),
    );
    assert!(matches!(result, Err(Error::NoLanguages)));
}

#[test]
fn language_key_fires_the_callback() {
    let mut session = bilingual_session();
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    session.on_language_key(move || seen.set(seen.get() + 1));

    session.handle_key("language").unwrap();
    assert_eq!(fired.get(), 1);
}

#[test]
fn directory_source_reads_utf16le_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in EN_KLC.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    std::fs::write(dir.path().join("english.klc"), bytes).unwrap();

    let source = keyosk_core::DirectorySource::new(dir.path());
    let config = KeyboardConfig::with_languages("english");
    let session = KeyboardSession::new(config, Box::new(source)).unwrap();
    assert_eq!(session.layout().locale_name, "en-US");
}

#[test]
fn language_captions_follow_the_configuration() {
    let mut source = InMemorySource::new();
    source.insert("english", EN_KLC);
    let mut config = KeyboardConfig::with_languages("english : English (US)");
    config.show_selected_language = true;
    let session = KeyboardSession::new(config, Box::new(source)).unwrap();
    assert_eq!(session.language_caption(), "English (US)");
}
