//! Input events fed to the event loop by the view layer.

use crate::form::FieldName;

/// A raw keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Enter,
}

/// An input event from the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A keystroke, routed to the focused field.
    Key(Key),
    /// The submit trigger (button activation).
    Submit,
    /// Toggle visibility of a secret field.
    ToggleReveal(FieldName),
    /// Restore the initial form state.
    Reset,
    /// Stop the event loop.
    Quit,
}
