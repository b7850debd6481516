//! Field validation.
//!
//! This module provides the pure predicates behind each field rule and a
//! fluent builder for running rule chains against form fields.
//!
//! # Example
//!
//! ```ignore
//! use anteroom::form::FieldName;
//! use anteroom::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&form.email(), FieldName::Email)
//!         .required("Email is required")
//!         .email("Please enter a valid email address")
//!     .field(&form.password(), FieldName::Password)
//!         .password("Password must be at least 8 characters")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with submission
//! }
//! ```

pub mod rules;

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
