//! Pure renderer: observable state in, element tree out.

use std::time::Instant;

use crate::form::{Field, FieldName, SignupForm};
use crate::toast::{Toast, ToastController, ToastLevel};

use super::{Element, Style, Tone};

/// Build the element tree for the current state.
///
/// Deterministic: the same form, toast slot, and `now` always produce the
/// same tree. The event loop calls this after every state change; tests
/// call it directly.
pub fn render(form: &SignupForm, toasts: &ToastController, now: Instant) -> Element {
    if form.is_logged_in() {
        return logged_in_view();
    }

    let mut page = Element::column()
        .gap(1)
        .id("login")
        .child(
            Element::text("Sign in").style(Style::new().bold().tone(Tone::Primary)),
        )
        .child(field_section(form.email(), FieldName::Email))
        .child(field_section(form.password(), FieldName::Password))
        .child(field_section(form.confirm(), FieldName::Confirm))
        .child(submit_button(form));

    if let Some(toast) = toasts.active_at(now) {
        page = page.child(toast_overlay(&toast));
    }

    page
}

fn logged_in_view() -> Element {
    Element::column()
        .id("logged-in")
        .child(Element::text("Login successful!").style(Style::new().bold().tone(Tone::Success)))
}

fn field_section(field: &Field, name: FieldName) -> Element {
    let mut section = Element::column()
        .id(format!("{}-section", name.id()))
        .child(Element::text(name.label()))
        .child(field_line(field, name));

    // Message line: error wins, then the persistent hint. The password hint
    // stays visible while valid and switches tone through the error branch
    // when it isn't.
    if let Some(error) = field.error() {
        section = section.child(
            Element::text(error)
                .id(format!("{}-error", name.id()))
                .style(Style::new().tone(Tone::Danger)),
        );
    } else if let Some(hint) = field.hint() {
        section = section.child(
            Element::text(hint)
                .id(format!("{}-hint", name.id()))
                .style(Style::new().tone(Tone::Muted)),
        );
    }

    section
}

fn field_line(field: &Field, name: FieldName) -> Element {
    let value = if field.is_empty() {
        Element::text(field.placeholder()).style(Style::new().tone(Tone::Muted))
    } else {
        let mut style = Style::new();
        if !field.is_valid() {
            style = style.tone(Tone::Danger);
        }
        Element::text(field.display_value()).style(style)
    };

    let mut line = Element::row().gap(1).id(name.id()).child(value);

    if field.is_secret() {
        let marker = if field.is_revealed() { "hide" } else { "show" };
        line = line.child(
            Element::text(marker)
                .id(format!("{}-reveal", name.id()))
                .style(Style::new().tone(Tone::Muted)),
        );
    }

    line
}

fn submit_button(form: &SignupForm) -> Element {
    let enabled = !form.email().is_empty()
        && !form.password().is_empty()
        && !form.confirm().is_empty();

    let tone = if enabled { Tone::Primary } else { Tone::Muted };

    Element::text("Sign in")
        .id("submit")
        .disabled(!enabled)
        .style(Style::new().bold().tone(tone))
}

fn toast_overlay(toast: &Toast) -> Element {
    let tone = match toast.level {
        ToastLevel::Info => Tone::Primary,
        ToastLevel::Success => Tone::Success,
        ToastLevel::Warning => Tone::Muted,
        ToastLevel::Error => Tone::Danger,
    };

    Element::text(toast.message.clone())
        .id("toast")
        .style(Style::new().tone(tone))
}
