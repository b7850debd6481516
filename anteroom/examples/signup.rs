//! Scripted sign-in demo.
//!
//! Drives the event loop with a canned keystroke sequence and prints each
//! rendered tree to stdout: a rejected submit (toast, auto-dismissed after
//! two seconds), then a corrected email and a successful sign-in.

use std::fs::File;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tokio::time::sleep;

use anteroom::prelude::*;

fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    if let Some(text) = element.text_content() {
        let marker = if element.disabled { " (disabled)" } else { "" };
        println!("{indent}{text}{marker}");
    }
    for child in element.children() {
        print_tree(child, depth + 1);
    }
}

#[tokio::main]
async fn main() {
    // Log to a file so stdout stays readable
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let runtime = Runtime::new();
    let events = runtime.sender();

    let driver = tokio::spawn(async move {
        let type_text = |text: &'static str| {
            let events = events.clone();
            async move {
                for c in text.chars() {
                    events.send(FormEvent::Key(Key::Char(c))).await.ok();
                }
            }
        };

        // Fill everything in, but with an undotted email domain
        type_text("user@example").await;
        events.send(FormEvent::Key(Key::Tab)).await.ok();
        type_text("abcd1234").await;
        events.send(FormEvent::ToggleReveal(FieldName::Password)).await.ok();
        events.send(FormEvent::Key(Key::Tab)).await.ok();
        type_text("abcd1234").await;

        // Rejected: the toast appears, then dismisses itself
        events.send(FormEvent::Submit).await.ok();
        sleep(Duration::from_millis(2300)).await;

        // Fix the email and try again
        events.send(FormEvent::Key(Key::Tab)).await.ok();
        events.send(FormEvent::Key(Key::End)).await.ok();
        type_text(".com").await;
        events.send(FormEvent::Submit).await.ok();

        events.send(FormEvent::Quit).await.ok();
    });

    let result = runtime
        .run(|tree| {
            println!("────────────────────────────────");
            print_tree(tree, 0);
        })
        .await;

    driver.await.ok();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}
