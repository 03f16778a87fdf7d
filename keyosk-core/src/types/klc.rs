use std::collections::HashMap;

/// Dead-key code to (follower code -> composed code). All codes are BMP
/// codepoints parsed from 4-hex-digit tokens.
pub type DeadKeyTable = HashMap<u16, HashMap<u16, u16>>;

/// Virtual-key name to the ordered codepoint sequence a single press emits.
pub type LigatureTable = HashMap<String, Vec<u16>>;

/// A named modifier combination, as declared in the SHIFTSTATE section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftState {
    Default,
    Shift,
    Ctrl,
    AltGrp,
    CtrlShift,
    ShiftAltGrp,
}

/// Maps each declared shift state to its 1-based value-column index.
///
/// A layout is free to omit combinations; an absent entry means the
/// combination is unsupported and resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftStateMap {
    pub default: Option<usize>,
    pub shift: Option<usize>,
    pub ctrl: Option<usize>,
    pub altgrp: Option<usize>,
    pub ctrl_shift: Option<usize>,
    pub shift_altgrp: Option<usize>,
}

impl ShiftStateMap {
    pub fn column(&self, state: ShiftState) -> Option<usize> {
        match state {
            ShiftState::Default => self.default,
            ShiftState::Shift => self.shift,
            ShiftState::Ctrl => self.ctrl,
            ShiftState::AltGrp => self.altgrp,
            ShiftState::CtrlShift => self.ctrl_shift,
            ShiftState::ShiftAltGrp => self.shift_altgrp,
        }
    }

    pub fn set(&mut self, state: ShiftState, column: usize) {
        let slot = match state {
            ShiftState::Default => &mut self.default,
            ShiftState::Shift => &mut self.shift,
            ShiftState::Ctrl => &mut self.ctrl,
            ShiftState::AltGrp => &mut self.altgrp,
            ShiftState::CtrlShift => &mut self.ctrl_shift,
            ShiftState::ShiftAltGrp => &mut self.shift_altgrp,
        };
        *slot = Some(column);
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none()
            && self.shift.is_none()
            && self.ctrl.is_none()
            && self.altgrp.is_none()
            && self.ctrl_shift.is_none()
            && self.shift_altgrp.is_none()
    }
}

/// One raw value column of a LAYOUT row, classified at parse time so later
/// stages never sniff string shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// `-1` — the key produces nothing in this column.
    Empty,
    /// A plain 4-hex-digit codepoint.
    Code(u16),
    /// A 4-hex-digit codepoint suffixed `@` (dead-key cap).
    DeadCode(u16),
    /// `%%` — resolve through the ligature table by virtual-key name.
    LigatureMarker,
    /// Anything else passes through verbatim.
    Literal(String),
}

/// One key-definition row from the LAYOUT section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    /// Hardware scan code token, e.g. `1e` or `29`.
    pub scan_code: String,
    /// Virtual-key name token, e.g. `A` or `OEM_1`.
    pub virtual_key: String,
    /// Capability digit (caps-lock affects this key).
    pub cap: u8,
    /// Value columns in declaration order, 3 to 6 of them.
    pub values: Vec<RawValue>,
}

/// Everything extracted from one .klc layout file, before the physical key
/// table is built.
#[derive(Debug, Clone, PartialEq)]
pub struct KlcFile {
    pub locale_name: String,
    pub shift_states: ShiftStateMap,
    pub dead_keys: DeadKeyTable,
    pub ligatures: LigatureTable,
    pub rows: Vec<KeyRow>,
}
