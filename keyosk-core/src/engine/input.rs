//! Classification of incoming key identifiers.

/// Named control keys of the onscreen keyboard. Everything that is not a
/// control key is an ordinary character emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Shift,
    CapsLock,
    AltGrp,
    Backspace,
    Enter,
    Tab,
    Ctrl,
    Alt,
    Language,
    Spare,
}

impl ControlKey {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "shift" => Some(ControlKey::Shift),
            "caps lock" => Some(ControlKey::CapsLock),
            "alt grp" => Some(ControlKey::AltGrp),
            "backspace" => Some(ControlKey::Backspace),
            "enter" => Some(ControlKey::Enter),
            "tab" => Some(ControlKey::Tab),
            "ctrl" => Some(ControlKey::Ctrl),
            "alt" => Some(ControlKey::Alt),
            "language" => Some(ControlKey::Language),
            "spare" => Some(ControlKey::Spare),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ControlKey::Shift => "shift",
            ControlKey::CapsLock => "caps lock",
            ControlKey::AltGrp => "alt grp",
            ControlKey::Backspace => "backspace",
            ControlKey::Enter => "enter",
            ControlKey::Tab => "tab",
            ControlKey::Ctrl => "ctrl",
            ControlKey::Alt => "alt",
            ControlKey::Language => "language",
            ControlKey::Spare => "spare",
        }
    }
}

/// A raw key identifier sorted into the path that handles it. Identifiers
/// longer than two characters are control tokens; `space` is rewritten to a
/// plain space and takes the ordinary path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    Control(ControlKey),
    Character(String),
    /// A long token that names no control key; dropped without effect.
    Ignored,
}

impl KeyPress {
    pub fn classify(key: &str) -> KeyPress {
        if key == "space" {
            return KeyPress::Character(" ".to_string());
        }
        if key.chars().count() > 2 {
            return match ControlKey::from_name(key) {
                Some(control) => KeyPress::Control(control),
                None => KeyPress::Ignored,
            };
        }
        KeyPress::Character(key.to_string())
    }
}
