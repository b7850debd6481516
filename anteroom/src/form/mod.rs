//! Form state for the sign-in screen.
//!
//! `SignupForm` owns the three fields and derives their validity. Every
//! mutator re-runs the rules for the fields it touched, so the validity
//! flags are never stale: changing the password re-checks the existing
//! confirmation, not only the other way around.

mod field;

pub use field::Field;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::validation::Validator;

/// Error message for a malformed email address.
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
/// Helper text shown under the password field.
pub const PASSWORD_HINT: &str = "At least 8 characters, letters and digits";
/// Error message for an unacceptable password.
pub const PASSWORD_ERROR: &str = "Password must be at least 8 characters and contain letters and digits";
/// Error message for a mismatched confirmation.
pub const CONFIRM_ERROR: &str = "Passwords do not match";
/// Toast message shown when submit is rejected.
pub const REJECTED_MESSAGE: &str = "Please check your email and password";

/// The three fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Email,
    Password,
    Confirm,
}

impl FieldName {
    /// Stable id used in the rendered tree.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Confirm => "Confirm password",
        }
    }

    /// Next field in focus order (wraps around).
    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Confirm,
            Self::Confirm => Self::Email,
        }
    }

    /// Previous field in focus order (wraps around).
    pub fn prev(&self) -> Self {
        match self {
            Self::Email => Self::Confirm,
            Self::Password => Self::Email,
            Self::Confirm => Self::Password,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single value edit, as produced from a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields filled and valid; the form is now logged in.
    LoggedIn,
    /// At least one field empty or invalid; the caller should surface the
    /// rejection (toast).
    Rejected,
}

/// State of the sign-in form.
///
/// Cloning shares the underlying state, so a clone handed to the event
/// loop observes the same form.
#[derive(Debug)]
pub struct SignupForm {
    email: Field,
    password: Field,
    confirm: Field,
    logged_in: Arc<AtomicBool>,
    /// Dirty flag for form-level transitions (login, reset)
    dirty: Arc<AtomicBool>,
}

impl SignupForm {
    /// Create a fresh form: empty fields, nothing flagged invalid yet.
    pub fn new() -> Self {
        let email = Field::with_placeholder("you@example.com");
        let password = Field::secret("Enter your password");
        password.set_hint(PASSWORD_HINT);
        let confirm = Field::secret("Repeat your password");

        Self {
            email,
            password,
            confirm,
            logged_in: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Field access
    // -------------------------------------------------------------------------

    /// The email field.
    pub fn email(&self) -> &Field {
        &self.email
    }

    /// The password field.
    pub fn password(&self) -> &Field {
        &self.password
    }

    /// The confirmation field.
    pub fn confirm(&self) -> &Field {
        &self.confirm
    }

    /// Look up a field by name.
    pub fn field(&self, name: FieldName) -> &Field {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Confirm => &self.confirm,
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replace the email value and re-derive its validity.
    pub fn set_email(&self, value: impl Into<String>) {
        self.email.set_value(value);
        self.revalidate(FieldName::Email);
    }

    /// Replace the password value and re-derive the password and
    /// confirmation validity.
    pub fn set_password(&self, value: impl Into<String>) {
        self.password.set_value(value);
        self.revalidate(FieldName::Password);
        self.revalidate(FieldName::Confirm);
    }

    /// Replace the confirmation value and re-derive its validity.
    pub fn set_confirmation(&self, value: impl Into<String>) {
        self.confirm.set_value(value);
        self.revalidate(FieldName::Confirm);
    }

    /// Apply a keystroke edit to one field and re-derive the validity of
    /// everything the edit may have affected.
    pub fn apply_edit(&self, name: FieldName, op: EditOp) {
        let field = self.field(name);
        match op {
            EditOp::Insert(c) => field.insert_char(c),
            EditOp::Backspace => field.delete_char_before(),
            EditOp::Delete => field.delete_char_at(),
            EditOp::CursorLeft => field.cursor_left(),
            EditOp::CursorRight => field.cursor_right(),
            EditOp::CursorHome => field.cursor_home(),
            EditOp::CursorEnd => field.cursor_end(),
        }

        // Cursor moves don't change the value, but re-deriving is cheap and
        // keeps the flags a pure function of the current values.
        self.revalidate(name);
        if name == FieldName::Password {
            self.revalidate(FieldName::Confirm);
        }
    }

    fn revalidate(&self, name: FieldName) {
        match name {
            FieldName::Email => {
                Validator::new()
                    .field(&self.email, FieldName::Email)
                    .email(EMAIL_ERROR)
                    .validate();
            }
            FieldName::Password => {
                Validator::new()
                    .field(&self.password, FieldName::Password)
                    .password(PASSWORD_ERROR)
                    .validate();
            }
            FieldName::Confirm => {
                Validator::new()
                    .field(&self.confirm, FieldName::Confirm)
                    .equals(self.password.value(), CONFIRM_ERROR)
                    .validate();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Whether the email field currently passes validation.
    pub fn email_valid(&self) -> bool {
        self.email.is_valid()
    }

    /// Whether the password field currently passes validation.
    pub fn password_valid(&self) -> bool {
        self.password.is_valid()
    }

    /// Whether the confirmation currently matches the password.
    pub fn confirm_valid(&self) -> bool {
        self.confirm.is_valid()
    }

    /// True iff no field is empty and no field has a validation error.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm.is_empty()
            && self.email.is_valid()
            && self.password.is_valid()
            && self.confirm.is_valid()
    }

    /// Whether a submit has already succeeded.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Attempt to submit the form.
    ///
    /// Succeeding a second time keeps the form logged in; the flag is set,
    /// never toggled.
    pub fn submit(&self) -> SubmitOutcome {
        if self.can_submit() {
            self.logged_in.store(true, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
            info!("submit accepted");
            SubmitOutcome::LoggedIn
        } else {
            debug!(
                "submit rejected (email={}, password={}, confirm={})",
                self.email.is_valid(),
                self.password.is_valid(),
                self.confirm.is_valid()
            );
            SubmitOutcome::Rejected
        }
    }

    /// Restore the initial lifecycle state: empty fields, no errors, not
    /// logged in.
    pub fn reset(&self) {
        self.email.reset();
        self.password.reset();
        self.confirm.reset();
        self.logged_in.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        debug!("form reset");
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if any part of the form changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
            || self.email.is_dirty()
            || self.password.is_dirty()
            || self.confirm.is_dirty()
    }

    /// Clear all dirty flags.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
        self.email.clear_dirty();
        self.password.clear_dirty();
        self.confirm.clear_dirty();
    }
}

impl Clone for SignupForm {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm: self.confirm.clone(),
            logged_in: Arc::clone(&self.logged_in),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
