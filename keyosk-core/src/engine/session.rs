use super::buffer::TextBuffer;
use super::constraints::FieldConstraints;
use super::input::{ControlKey, KeyPress};
use super::output::KeyOutput;
use super::state::{ActiveTable, ModifierState};
use crate::config::KeyboardConfig;
use crate::error::{Error, Result};
use crate::source::LayoutSource;
use crate::types::{
    direction_for_locale, KeyEntry, KeyValue, LayoutDefinition, TextDirection, KEY_SLOT_COUNT,
};
use std::collections::HashMap;
use std::sync::Arc;

type Callback = Box<dyn FnMut()>;

/// Optional host hooks fired by the function keys and the commit actions.
#[derive(Default)]
pub struct SessionCallbacks {
    enter: Option<Callback>,
    tab: Option<Callback>,
    ctrl: Option<Callback>,
    alt: Option<Callback>,
    spare: Option<Callback>,
    language: Option<Callback>,
    accept: Option<Callback>,
    cancel: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}

/// Handle for an in-flight layout load. A ticket issued before a newer
/// language selection is stale and its result is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    index: usize,
    generation: u64,
}

impl LoadTicket {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// One active onscreen-keyboard session: the live modifier state, the text
/// buffer being edited, the active layout, and the per-language layout
/// cache. All keystroke handling happens synchronously on this object.
pub struct KeyboardSession {
    config: KeyboardConfig,
    callbacks: SessionCallbacks,
    source: Box<dyn LayoutSource>,
    layouts: HashMap<usize, Arc<LayoutDefinition>>,
    active_language: usize,
    active_layout: Arc<LayoutDefinition>,
    generation: u64,
    modifiers: ModifierState,
    buffer: TextBuffer,
    constraints: FieldConstraints,
}

impl KeyboardSession {
    /// Creates a session and loads the first configured language.
    pub fn new(config: KeyboardConfig, source: Box<dyn LayoutSource>) -> Result<Self> {
        if config.languages.is_empty() {
            return Err(Error::NoLanguages);
        }
        let file_name = config.languages[0].file_name.clone();
        let text = source.fetch_layout_text(&file_name)?;
        let layout = Arc::new(LayoutDefinition::parse(&text)?);
        let mut layouts = HashMap::new();
        layouts.insert(0, Arc::clone(&layout));
        Ok(Self {
            config,
            callbacks: SessionCallbacks::default(),
            source,
            layouts,
            active_language: 0,
            active_layout: layout,
            generation: 0,
            modifiers: ModifierState::new(),
            buffer: TextBuffer::new(),
            constraints: FieldConstraints::default(),
        })
    }

    // --- language selection -------------------------------------------------

    /// Switches to the language at `index`, fetching and parsing its layout
    /// unless the cache is warm. On failure the previous layout stays
    /// active.
    pub fn select_language(&mut self, index: usize) -> Result<()> {
        let ticket = self.begin_language_load(index)?;
        if let Some(layout) = self.layouts.get(&index) {
            let layout = Arc::clone(layout);
            self.activate(index, layout);
            return Ok(());
        }
        let file_name = self.config.languages[index].file_name.clone();
        let text = match self.source.fetch_layout_text(&file_name) {
            Ok(text) => text,
            Err(err) => {
                log::error!("layout fetch failed for {file_name:?}: {err}");
                return Err(err.into());
            }
        };
        self.finish_language_load(ticket, &text)
    }

    /// Starts a load for an asynchronous host. Any later call that bumps the
    /// generation (another `begin_language_load` or `select_language`)
    /// supersedes this ticket.
    pub fn begin_language_load(&mut self, index: usize) -> Result<LoadTicket> {
        if index >= self.config.languages.len() {
            return Err(Error::UnknownLanguage(index));
        }
        self.generation += 1;
        Ok(LoadTicket {
            index,
            generation: self.generation,
        })
    }

    /// Completes a load with fetched layout text. Stale tickets are refused
    /// and the session is left untouched.
    pub fn finish_language_load(&mut self, ticket: LoadTicket, text: &str) -> Result<()> {
        if ticket.generation != self.generation {
            log::warn!(
                "discarding stale layout load for language index {}",
                ticket.index
            );
            return Err(Error::StaleLoad {
                requested: ticket.generation,
                current: self.generation,
            });
        }
        let layout = Arc::new(LayoutDefinition::parse(text)?);
        self.layouts.insert(ticket.index, Arc::clone(&layout));
        self.activate(ticket.index, layout);
        Ok(())
    }

    fn activate(&mut self, index: usize, layout: Arc<LayoutDefinition>) {
        self.active_language = index;
        self.active_layout = layout;
        self.modifiers.reset();
        log::debug!(
            "activated language {index} ({:?})",
            self.active_layout.locale_name
        );
    }

    // --- keystroke handling -------------------------------------------------

    /// Routes a raw key identifier: recognized control names take the
    /// control path, everything else is an ordinary character emission.
    pub fn handle_key(&mut self, key: &str) -> Result<KeyOutput> {
        match KeyPress::classify(key) {
            KeyPress::Control(control) => self.handle_control_key(control),
            KeyPress::Character(text) => Ok(self.handle_character_key(&text)),
            KeyPress::Ignored => Ok(KeyOutput::None),
        }
    }

    pub fn handle_control_key(&mut self, key: ControlKey) -> Result<KeyOutput> {
        match key {
            ControlKey::Shift => {
                self.modifiers.press_shift();
                Ok(KeyOutput::TableChanged)
            }
            ControlKey::AltGrp => {
                self.modifiers.press_alt_graph();
                Ok(KeyOutput::TableChanged)
            }
            ControlKey::CapsLock => {
                self.modifiers.press_caps_lock();
                Ok(KeyOutput::TableChanged)
            }
            ControlKey::Backspace => Ok(if self.buffer.delete_before_caret() {
                KeyOutput::Delete
            } else {
                KeyOutput::None
            }),
            ControlKey::Language => {
                let next = (self.active_language + 1) % self.config.languages.len();
                self.select_language(next)?;
                fire(&mut self.callbacks.language);
                Ok(KeyOutput::LanguageChanged(next))
            }
            ControlKey::Enter => {
                fire(&mut self.callbacks.enter);
                Ok(KeyOutput::None)
            }
            ControlKey::Tab => {
                fire(&mut self.callbacks.tab);
                Ok(KeyOutput::None)
            }
            ControlKey::Ctrl => {
                fire(&mut self.callbacks.ctrl);
                Ok(KeyOutput::None)
            }
            ControlKey::Alt => {
                fire(&mut self.callbacks.alt);
                Ok(KeyOutput::None)
            }
            ControlKey::Spare => {
                fire(&mut self.callbacks.spare);
                Ok(KeyOutput::None)
            }
        }
    }

    /// Handles an already-resolved character or ligature emission: single-
    /// shot modifiers, dead-key composition, then validated insertion.
    pub fn handle_character_key(&mut self, text: &str) -> KeyOutput {
        self.modifiers.after_character();

        let Some(first) = text.chars().next() else {
            return KeyOutput::None;
        };
        let code = u16::try_from(u32::from(first)).ok();

        if let Some(pending) = self.modifiers.take_pending_dead_key() {
            let composed = code
                .and_then(|c| self.active_layout.dead_key(pending)?.get(&c))
                .copied()
                .and_then(|c| char::from_u32(u32::from(c)));
            return match composed {
                Some(ch) => self.insert_text(&ch.to_string()),
                None => {
                    // composition miss drops the key outright
                    log::debug!("dead key {pending:#06x} has no mapping for {code:?}");
                    KeyOutput::None
                }
            };
        }

        if let Some(code) = code {
            if text.chars().count() == 1 && self.active_layout.dead_keys.contains_key(&code) {
                self.modifiers.set_pending_dead_key(code);
                return KeyOutput::DeadKeyPending(code);
            }
        }

        self.insert_text(text)
    }

    fn insert_text(&mut self, text: &str) -> KeyOutput {
        if text.is_empty() {
            return KeyOutput::None;
        }
        let candidate = self.buffer.with_insertion(text);
        if !self
            .config
            .rules
            .allows(&self.constraints, text, &candidate)
        {
            return KeyOutput::Rejected;
        }
        let inserted = text.chars().count();
        self.buffer.commit(candidate, inserted);
        KeyOutput::Insert(text.to_string())
    }

    // --- editing lifecycle --------------------------------------------------

    /// Focuses a field: installs its constraints and seeds the buffer with
    /// its current value, caret at the end.
    pub fn begin_editing(&mut self, constraints: FieldConstraints, initial_text: &str) {
        self.constraints = constraints;
        self.buffer = TextBuffer::from_text(initial_text);
    }

    /// Commits the buffer: returns its content, resets the modifier state.
    pub fn accept(&mut self) -> String {
        let text = self.buffer.take();
        self.modifiers.reset();
        fire(&mut self.callbacks.accept);
        text
    }

    /// Discards the buffer and resets the modifier state.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.modifiers.reset();
        fire(&mut self.callbacks.cancel);
    }

    // --- views --------------------------------------------------------------

    /// The 47-slot table for the live modifier state, with the caps-lock
    /// presentation rule applied.
    pub fn active_table(&self) -> [KeyValue; KEY_SLOT_COUNT] {
        let table = self.modifiers.active_table();
        let uppercase = self.config.permanent_uppercase
            || (self.modifiers.caps_lock() && table == ActiveTable::Default);
        std::array::from_fn(|slot| {
            let value = self.active_layout.key_slots[slot].value(table);
            if uppercase {
                value.to_uppercase()
            } else {
                value.clone()
            }
        })
    }

    pub fn key_slots(&self) -> &[KeyEntry; KEY_SLOT_COUNT] {
        &self.active_layout.key_slots
    }

    pub fn text_direction(&self) -> TextDirection {
        direction_for_locale(&self.active_layout.locale_name)
    }

    pub fn layout(&self) -> &LayoutDefinition {
        &self.active_layout
    }

    pub fn active_language(&self) -> usize {
        self.active_language
    }

    /// Caption for the language key, honoring `show_selected_language`.
    pub fn language_caption(&self) -> String {
        self.config.language_caption(self.active_language)
    }

    pub fn buffer_text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    /// Moves the caret (host clicks inside the field). Clamped to the
    /// buffer's length.
    pub fn set_caret(&mut self, caret: usize) {
        self.buffer.set_caret(caret);
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn pending_dead_key(&self) -> Option<u16> {
        self.modifiers.pending_dead_key()
    }

    // --- callback registration ----------------------------------------------

    pub fn on_enter_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.enter = Some(Box::new(callback));
    }

    pub fn on_tab_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.tab = Some(Box::new(callback));
    }

    pub fn on_ctrl_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.ctrl = Some(Box::new(callback));
    }

    pub fn on_alt_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.alt = Some(Box::new(callback));
    }

    pub fn on_spare_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.spare = Some(Box::new(callback));
    }

    pub fn on_language_key(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.language = Some(Box::new(callback));
    }

    pub fn on_accept(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.accept = Some(Box::new(callback));
    }

    pub fn on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.cancel = Some(Box::new(callback));
    }
}
