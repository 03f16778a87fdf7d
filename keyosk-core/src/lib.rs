pub mod config;
pub mod engine;
pub mod error;
pub mod klc;
pub mod layout;
pub mod source;
pub mod types;

pub use types::*;

// Re-export commonly used types
pub use config::{KeyboardConfig, LanguageEntry};
pub use engine::{
    ActiveTable, ControlKey, FieldConstraints, FieldType, KeyOutput, KeyboardSession, LoadTicket,
    ModifierState, ValidationRules,
};
pub use error::{Error, Result};
pub use klc::{KlcError, KlcParser};
pub use source::{DirectorySource, FallbackSource, InMemorySource, LayoutSource, SourceError};
