//! Keystroke resolution engine.
//!
//! This module turns raw key identifiers plus live modifier state into the
//! characters a session emits, including two-stroke dead-key composition and
//! per-field edit validation.

mod buffer;
mod constraints;
mod input;
mod output;
mod session;
mod state;

pub use buffer::TextBuffer;
pub use constraints::{FieldConstraints, FieldType, ValidationRules};
pub use input::{ControlKey, KeyPress};
pub use output::KeyOutput;
pub use session::{KeyboardSession, LoadTicket, SessionCallbacks};
pub use state::{ActiveTable, ComboOrigin, ModifierState};
