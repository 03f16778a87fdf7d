//! What a key press did to the session.

/// Result of routing one key press through the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutput {
    /// Nothing observable happened (callback-only keys, failed dead-key
    /// composition, backspace at the start of the buffer).
    None,
    /// Text was inserted into the buffer at the caret.
    Insert(String),
    /// One character left of the caret was deleted.
    Delete,
    /// The emission violated a field constraint; buffer and caret are
    /// unchanged.
    Rejected,
    /// A dead key was pressed; output is suppressed until the next press.
    DeadKeyPending(u16),
    /// A modifier changed the active table.
    TableChanged,
    /// The language key advanced to this language index.
    LanguageChanged(usize),
}
