use anteroom::form::{Field, FieldName};
use anteroom::validation::rules::{is_valid_email, is_valid_password};
use anteroom::validation::{ValidationResult, Validator};

// =============================================================================
// Email predicate
// =============================================================================

#[test]
fn test_email_accepts_dotted_domain() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@mail.example.org"));
}

#[test]
fn test_email_rejects_missing_at() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("userexample.com"));
}

#[test]
fn test_email_rejects_undotted_domain() {
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("user@localhost"));
}

#[test]
fn test_email_rejects_empty_and_whitespace() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("   "));
    assert!(!is_valid_email("a @b.co"));
}

#[test]
fn test_email_rejects_missing_parts() {
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@"));
}

// =============================================================================
// Password predicate
// =============================================================================

#[test]
fn test_password_accepts_letters_and_digits() {
    assert!(is_valid_password("abcd1234"));
    assert!(is_valid_password("A1b2C3d4e5"));
}

#[test]
fn test_password_rejects_missing_digit() {
    assert!(!is_valid_password("abcdefgh"));
}

#[test]
fn test_password_rejects_missing_letter() {
    assert!(!is_valid_password("12345678"));
}

#[test]
fn test_password_rejects_too_short() {
    assert!(!is_valid_password("1234567"));
    assert!(!is_valid_password("abc1234"));
}

#[test]
fn test_password_rejects_non_alphanumeric() {
    assert!(!is_valid_password("abcd1234!"));
    assert!(!is_valid_password("abcd 1234"));
    assert!(!is_valid_password("pässw0rd1"));
}

#[test]
fn test_password_rejects_empty() {
    assert!(!is_valid_password(""));
}

// =============================================================================
// Fluent builder
// =============================================================================

#[test]
fn test_validator_sets_first_failing_rule_message() {
    let field = Field::new();
    field.set_value("ab");

    let result = Validator::new()
        .field(&field, FieldName::Email)
        .min_length(3, "too short")
        .email("not an email")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(field.error().as_deref(), Some("too short"));
    assert_eq!(result.first_error().map(|e| e.field), Some(FieldName::Email));
}

#[test]
fn test_validator_clears_error_on_pass() {
    let field = Field::new();
    field.set_value("x");
    field.set_error("stale");

    let result = Validator::new()
        .field(&field, FieldName::Email)
        .required("required")
        .validate();

    assert!(result.is_valid());
    assert!(field.error().is_none());
}

#[test]
fn test_validator_required_rejects_blank() {
    let field = Field::new();
    field.set_value("   ");

    let result = Validator::new()
        .field(&field, FieldName::Email)
        .required("required")
        .validate();

    assert!(result.is_invalid());
}

#[test]
fn test_validator_multiple_fields_collects_all_errors() {
    let email = Field::new();
    email.set_value("nope");
    let password = Field::new();
    password.set_value("short");

    let result = Validator::new()
        .field(&email, FieldName::Email)
        .email("bad email")
        .field(&password, FieldName::Password)
        .password("bad password")
        .validate();

    assert_eq!(result.errors().len(), 2);
    assert!(email.has_error());
    assert!(password.has_error());
}

#[test]
fn test_validator_pattern_rule() {
    let field = Field::new();
    field.set_value("abc123");

    let result = Validator::new()
        .field(&field, FieldName::Password)
        .pattern(r"^[a-z]+$", "lowercase only")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(field.error().as_deref(), Some("lowercase only"));
}

#[test]
fn test_validator_equals_rule() {
    let field = Field::new();
    field.set_value("abcd1234");

    let matching = Validator::new()
        .field(&field, FieldName::Confirm)
        .equals("abcd1234".to_string(), "mismatch")
        .validate();
    assert!(matching.is_valid());

    let mismatched = Validator::new()
        .field(&field, FieldName::Confirm)
        .equals("abcd5678".to_string(), "mismatch")
        .validate();
    assert!(mismatched.is_invalid());
}

#[test]
fn test_validation_result_default_is_valid() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert!(result.first_error().is_none());
}
