use std::time::{Duration, Instant};

use anteroom::form::{PASSWORD_HINT, SignupForm};
use anteroom::toast::{Toast, ToastController};
use anteroom::view::{Tone, find, render};

fn now() -> Instant {
    Instant::now()
}

#[test]
fn test_fresh_form_renders_login_page() {
    let form = SignupForm::new();
    let toasts = ToastController::new();

    let tree = render(&form, &toasts, now());

    assert!(find(&tree, "login").is_some());
    assert!(find(&tree, "email").is_some());
    assert!(find(&tree, "password").is_some());
    assert!(find(&tree, "confirm").is_some());
    assert!(find(&tree, "logged-in").is_none());
}

#[test]
fn test_empty_fields_show_placeholders() {
    let form = SignupForm::new();
    let tree = render(&form, &ToastController::new(), now());

    let email_line = find(&tree, "email").unwrap();
    let placeholder = &email_line.children()[0];
    assert_eq!(placeholder.text_content(), Some("you@example.com"));
    assert_eq!(placeholder.style.tone, Some(Tone::Muted));
}

#[test]
fn test_error_line_appears_for_invalid_email() {
    let form = SignupForm::new();

    form.set_email("a@b.co");
    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "email-error").is_none());

    form.set_email("nope");
    let tree = render(&form, &ToastController::new(), now());
    let error = find(&tree, "email-error").unwrap();
    assert_eq!(error.style.tone, Some(Tone::Danger));
}

#[test]
fn test_password_hint_tone_follows_validity() {
    let form = SignupForm::new();

    // Untouched: hint shows in the neutral tone
    let tree = render(&form, &ToastController::new(), now());
    let hint = find(&tree, "password-hint").unwrap();
    assert_eq!(hint.text_content(), Some(PASSWORD_HINT));
    assert_eq!(hint.style.tone, Some(Tone::Muted));

    // Invalid: the message line switches to the danger tone
    form.set_password("abcdefgh");
    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "password-hint").is_none());
    let error = find(&tree, "password-error").unwrap();
    assert_eq!(error.style.tone, Some(Tone::Danger));

    // Valid again: back to the hint
    form.set_password("abcd1234");
    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "password-hint").is_some());
    assert!(find(&tree, "password-error").is_none());
}

#[test]
fn test_secret_values_render_masked() {
    let form = SignupForm::new();
    form.set_password("abcd1234");

    let tree = render(&form, &ToastController::new(), now());
    let line = find(&tree, "password").unwrap();
    assert_eq!(line.children()[0].text_content(), Some("••••••••"));
    assert_eq!(
        find(&tree, "password-reveal").unwrap().text_content(),
        Some("show")
    );

    form.password().toggle_reveal();
    let tree = render(&form, &ToastController::new(), now());
    let line = find(&tree, "password").unwrap();
    assert_eq!(line.children()[0].text_content(), Some("abcd1234"));
    assert_eq!(
        find(&tree, "password-reveal").unwrap().text_content(),
        Some("hide")
    );
}

#[test]
fn test_email_has_no_reveal_marker() {
    let form = SignupForm::new();
    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "email-reveal").is_none());
}

#[test]
fn test_submit_button_disabled_while_any_field_empty() {
    let form = SignupForm::new();

    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "submit").unwrap().disabled);

    form.set_email("a@b.co");
    form.set_password("abcd1234");
    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "submit").unwrap().disabled);

    form.set_confirmation("abcd1234");
    let tree = render(&form, &ToastController::new(), now());
    assert!(!find(&tree, "submit").unwrap().disabled);
}

#[test]
fn test_submit_button_enabled_even_when_invalid() {
    // Non-empty but invalid input leaves the button active; pressing it is
    // what produces the rejection toast
    let form = SignupForm::new();
    form.set_email("nope");
    form.set_password("x1");
    form.set_confirmation("x1");

    let tree = render(&form, &ToastController::new(), now());
    assert!(!find(&tree, "submit").unwrap().disabled);
}

#[test]
fn test_toast_overlay_present_while_visible() {
    let form = SignupForm::new();
    let toasts = ToastController::new();
    let before = Instant::now();
    toasts.show(Toast::error("check your input"));

    let tree = render(&form, &toasts, before + Duration::from_millis(100));
    let toast = find(&tree, "toast").unwrap();
    assert_eq!(toast.text_content(), Some("check your input"));
    assert_eq!(toast.style.tone, Some(Tone::Danger));

    let tree = render(&form, &toasts, before + Duration::from_millis(2100));
    assert!(find(&tree, "toast").is_none());
}

#[test]
fn test_logged_in_form_renders_success_view() {
    let form = SignupForm::new();
    form.set_email("a@b.co");
    form.set_password("abcd1234");
    form.set_confirmation("abcd1234");
    form.submit();

    let tree = render(&form, &ToastController::new(), now());
    assert!(find(&tree, "logged-in").is_some());
    assert!(find(&tree, "login").is_none());
    assert!(find(&tree, "submit").is_none());
}
