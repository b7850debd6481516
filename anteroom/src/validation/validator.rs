//! Fluent rule-chain builder.

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::rules;
use super::validatable::Validatable;
use crate::form::FieldName;

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: FieldName,
    set_error: Box<dyn Fn(Option<String>) + Send + Sync>,
    validate: Box<dyn Fn() -> Vec<String> + Send + Sync>,
}

/// Builder for validating multiple form fields.
///
/// Validation runs synchronously. The first failing rule of each field is
/// written back as that field's error; passing fields get their error
/// cleared.
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        field: &W,
        name: FieldName,
    ) -> FieldBuilder<W> {
        FieldBuilder {
            validator: self,
            field: field.clone(),
            name,
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let field_errors = (field.validate)();
            if let Some(first_error) = field_errors.first() {
                (field.set_error)(Some(first_error.clone()));
                errors.push(FieldError {
                    field: field.name,
                    message: first_error.clone(),
                });
            } else {
                (field.set_error)(None);
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    field: W,
    name: FieldName,
    rules: Vec<Rule<W::Value>>,
}

impl<W: Validatable + Clone + 'static> FieldBuilder<W> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<W2: Validatable + Clone + 'static>(
        self,
        field: &W2,
        name: FieldName,
    ) -> FieldBuilder<W2> {
        self.finalize().field(field, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let name = self.name;
        let field_for_value = self.field.clone();
        let field_for_error = self.field;
        let rules = self.rules;

        let validate: Box<dyn Fn() -> Vec<String> + Send + Sync> = Box::new(move || {
            let value = field_for_value.validation_value();
            rules.iter().filter_map(|rule| rule(&value).err()).collect()
        });

        let set_error: Box<dyn Fn(Option<String>) + Send + Sync> = Box::new(move |msg| {
            if let Some(msg) = msg {
                field_for_error.set_error(msg);
            } else {
                field_for_error.clear_error();
            }
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name,
            set_error,
            validate,
        });

        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String> + Clone + 'static> FieldBuilder<W> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require the value to match a regex pattern.
    ///
    /// # Panics
    ///
    /// Panics if the pattern does not compile.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = Regex::new(pattern).expect("invalid validation pattern");
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a plausible email address.
    ///
    /// Unlike `required`, an empty value fails this rule too: an emptied
    /// field is no longer a valid address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| rules::is_valid_email(v), msg)
    }

    /// Require an acceptable password.
    pub fn password(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| rules::is_valid_password(v), msg)
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: String, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v == &other, msg)
    }
}
