use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Internal state for a form field
#[derive(Debug, Default)]
struct FieldInner {
    /// Current text value
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Persistent helper text shown while the field has no error
    hint: Option<String>,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Validation error message (if any)
    error: Option<String>,
    /// Mask the value when rendered
    secret: bool,
    /// Temporarily show a secret value in clear text
    revealed: bool,
}

/// A text field with reactive state.
///
/// `Field` is a self-contained handle that manages its own text value,
/// cursor position, and validation error. Cloning shares the underlying
/// state, so a clone handed to the event loop observes the same field.
///
/// Validity is derived: a field is valid exactly while it has no error,
/// and errors are only ever written by re-running a validation rule after
/// a value change. A freshly created field has no error.
#[derive(Debug)]
pub struct Field {
    /// Internal state
    inner: Arc<RwLock<FieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FieldInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a secret (masked) field with a placeholder
    pub fn secret(placeholder: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FieldInner {
                placeholder: placeholder.into(),
                secret: true,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the value as it should be rendered.
    ///
    /// Secret fields come back masked with `•` unless revealed.
    pub fn display_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| {
                if guard.secret && !guard.revealed {
                    "•".repeat(guard.value.chars().count())
                } else {
                    guard.value.clone()
                }
            })
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the persistent helper text (if any)
    pub fn hint(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.hint.clone())
            .unwrap_or(None)
    }

    /// Get the cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Check if the field is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Check if this is a secret (masked) field
    pub fn is_secret(&self) -> bool {
        self.inner.read().map(|guard| guard.secret).unwrap_or(false)
    }

    /// Check if a secret field is currently revealed
    pub fn is_revealed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.revealed)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.cursor = 0;
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the persistent helper text
    pub fn set_hint(&self, hint: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.hint = Some(hint.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle visibility of a secret value
    pub fn toggle_reveal(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.secret
        {
            guard.revealed = !guard.revealed;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Restore the initial state: empty value, no error, concealed
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.cursor = 0;
            guard.error = None;
            guard.revealed = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Text manipulation (called by the event loop on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            // Find the previous character boundary
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.cursor = prev_cursor;
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete_char_at(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                guard.error = None; // Auto-clear error on value change
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor left
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor right
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor != 0
        {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to end
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message on this field.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this field has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Check if this field is currently valid (no error set).
    pub fn is_valid(&self) -> bool {
        !self.has_error()
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for Field {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        Field::set_error(self, msg)
    }

    fn clear_error(&self) {
        Field::clear_error(self)
    }

    fn has_error(&self) -> bool {
        Field::has_error(self)
    }

    fn error(&self) -> Option<String> {
        Field::error(self)
    }
}
