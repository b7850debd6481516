//! Pure field predicates.
//!
//! Every predicate takes a string and answers pass/fail. None of them have
//! side effects and none of them can fail: malformed input simply returns
//! `false`.

use std::str::FromStr;
use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

/// ASCII letters and digits only, at least 8 characters.
static PASSWORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{8,}$").expect("invalid password shape pattern"));

/// Check that a string is a plausible email address.
///
/// The address must parse and its domain must contain a dot with non-empty
/// parts on both sides, so `user@localhost` fails even though it parses.
pub fn is_valid_email(value: &str) -> bool {
    let Ok(parsed) = EmailAddress::from_str(value) else {
        return false;
    };
    match parsed.domain().rsplit_once('.') {
        Some((host, suffix)) => !host.is_empty() && !suffix.is_empty(),
        None => false,
    }
}

/// Check that a string is an acceptable password.
///
/// Accepts ASCII letters and digits only, minimum 8 characters, with at
/// least one letter and at least one digit.
pub fn is_valid_password(value: &str) -> bool {
    PASSWORD_SHAPE.is_match(value)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}
