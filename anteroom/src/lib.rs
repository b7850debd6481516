pub mod error;
pub mod form;
pub mod runtime;
pub mod toast;
pub mod validation;
pub mod view;
pub mod wakeup;

pub use runtime::Runtime;

pub mod prelude {
    pub use crate::error::RuntimeError;
    pub use crate::form::{EditOp, Field, FieldName, SignupForm, SubmitOutcome};
    pub use crate::runtime::{FormEvent, Key, Runtime, RuntimeConfig};
    pub use crate::toast::{DEFAULT_TOAST_DURATION, Toast, ToastController, ToastLevel};
    pub use crate::validation::{FieldError, Validatable, ValidationResult, Validator};
    pub use crate::view::{Content, Element, Style, Tone, find, render};
}
