//! Modifier state for one keyboard session.

/// Which key entered the current shift+altgrp combination first. This is the
/// only history the state machine keeps: it lets releasing either modifier
/// fall back to the other's single-modifier table instead of default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComboOrigin {
    #[default]
    None,
    Shift,
    AltGrp,
}

/// The table a key press resolves against, derived from the live modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTable {
    #[default]
    Default,
    Shift,
    AltGrp,
    ShiftAltGrp,
}

#[derive(Debug, Clone, Default)]
pub struct ModifierState {
    shift: bool,
    caps_lock: bool,
    alt_graph: bool,
    combo: ComboOrigin,
    pending_dead_key: Option<u16>,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    pub fn alt_graph(&self) -> bool {
        self.alt_graph
    }

    pub fn combo(&self) -> ComboOrigin {
        self.combo
    }

    pub fn active_table(&self) -> ActiveTable {
        match (self.shift, self.alt_graph) {
            (true, true) => ActiveTable::ShiftAltGrp,
            (true, false) => ActiveTable::Shift,
            (false, true) => ActiveTable::AltGrp,
            (false, false) => ActiveTable::Default,
        }
    }

    /// Shift press. Inside the combined state only shift is released; joining
    /// an active altgrp enters the combined state and records that altgrp
    /// came first.
    pub fn press_shift(&mut self) {
        self.caps_lock = false;
        if self.shift && self.alt_graph {
            self.shift = false;
            self.combo = ComboOrigin::None;
        } else if self.alt_graph {
            self.shift = true;
            self.combo = ComboOrigin::AltGrp;
        } else {
            self.shift = !self.shift;
            self.combo = if self.shift {
                ComboOrigin::Shift
            } else {
                ComboOrigin::None
            };
        }
    }

    /// Alt-graph press; mirror image of [`press_shift`](Self::press_shift).
    pub fn press_alt_graph(&mut self) {
        self.caps_lock = false;
        if self.shift && self.alt_graph {
            self.alt_graph = false;
            self.combo = ComboOrigin::None;
        } else if self.shift {
            self.alt_graph = true;
            self.combo = ComboOrigin::Shift;
        } else {
            self.alt_graph = !self.alt_graph;
            self.combo = if self.alt_graph {
                ComboOrigin::AltGrp
            } else {
                ComboOrigin::None
            };
        }
    }

    pub fn press_caps_lock(&mut self) {
        self.caps_lock = !self.caps_lock;
        self.shift = false;
        self.alt_graph = false;
        self.combo = ComboOrigin::None;
    }

    /// Shift and altgrp are single-shot: an ordinary character press clears
    /// them. Caps lock persists.
    pub fn after_character(&mut self) {
        self.shift = false;
        self.alt_graph = false;
        self.combo = ComboOrigin::None;
    }

    pub fn pending_dead_key(&self) -> Option<u16> {
        self.pending_dead_key
    }

    pub fn set_pending_dead_key(&mut self, code: u16) {
        self.pending_dead_key = Some(code);
    }

    pub fn take_pending_dead_key(&mut self) -> Option<u16> {
        self.pending_dead_key.take()
    }

    /// Back to all-false; used when the buffer is committed or discarded and
    /// when the language changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
