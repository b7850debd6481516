use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use anteroom::error::RuntimeError;
use anteroom::form::FieldName;
use anteroom::runtime::{FormEvent, Key, Runtime, RuntimeConfig};
use anteroom::view::{Element, find};

async fn send_chars(events: &mpsc::Sender<FormEvent>, text: &str) {
    for c in text.chars() {
        events.send(FormEvent::Key(Key::Char(c))).await.unwrap();
    }
}

#[tokio::test]
async fn test_quit_stops_the_loop() {
    let runtime = Runtime::new();
    let events = runtime.sender();

    let handle = tokio::spawn(runtime.run(|_| {}));
    events.send(FormEvent::Quit).await.unwrap();

    let result = handle.await.unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_dropping_all_senders_is_an_error() {
    let runtime = Runtime::new();
    let events = runtime.sender();

    let handle = tokio::spawn(runtime.run(|_| {}));
    drop(events);

    let result = handle.await.unwrap();
    assert!(matches!(result, Err(RuntimeError::ChannelClosed)));
}

#[tokio::test]
async fn test_full_signin_flow() {
    let runtime = Runtime::new();
    let events = runtime.sender();
    let form = runtime.form();

    let (tree_tx, mut tree_rx) = mpsc::unbounded_channel::<Element>();
    let handle = tokio::spawn(runtime.run(move |tree| {
        let _ = tree_tx.send(tree.clone());
    }));

    // Keystrokes go to the focused field; Tab moves focus
    send_chars(&events, "a@b.co").await;
    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events.send(FormEvent::Submit).await.unwrap();
    events.send(FormEvent::Quit).await.unwrap();

    handle.await.unwrap().unwrap();

    assert_eq!(form.email().value(), "a@b.co");
    assert_eq!(form.password().value(), "abcd1234");
    assert!(form.is_logged_in());

    let mut last = None;
    while let Ok(tree) = tree_rx.try_recv() {
        last = Some(tree);
    }
    let last = last.expect("at least one render");
    assert!(find(&last, "logged-in").is_some());
}

#[tokio::test]
async fn test_rejected_submit_shows_toast_that_expires() {
    let config = RuntimeConfig::new().toast_duration(Duration::from_millis(200));
    let runtime = Runtime::with_config(config);
    let events = runtime.sender();
    let form = runtime.form();
    let toasts = runtime.toasts();

    let handle = tokio::spawn(runtime.run(|_| {}));

    // Non-empty but invalid: pressing submit produces the rejection toast
    send_chars(&events, "not-an-email").await;
    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events.send(FormEvent::Submit).await.unwrap();

    let mut tries = 0;
    while !toasts.is_visible() && tries < 100 {
        sleep(Duration::from_millis(10)).await;
        tries += 1;
    }
    assert!(toasts.is_visible());
    assert!(!form.is_logged_in());

    // The loop's deadline branch sweeps the slot once the duration passes
    sleep(Duration::from_millis(500)).await;
    assert!(!toasts.is_visible());
    assert!(toasts.message().is_none());

    events.send(FormEvent::Quit).await.unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_outside_show_wakes_the_loop() {
    let runtime = Runtime::new();
    let events = runtime.sender();
    let toasts = runtime.toasts();

    let (tree_tx, mut tree_rx) = mpsc::unbounded_channel::<Element>();
    let handle = tokio::spawn(runtime.run(move |tree| {
        let _ = tree_tx.send(tree.clone());
    }));

    // Mutation from outside a loop iteration: the wakeup triggers a render
    toasts.show("from outside");
    sleep(Duration::from_millis(100)).await;

    events.send(FormEvent::Quit).await.unwrap();
    handle.await.unwrap().unwrap();

    let mut saw_toast = false;
    while let Ok(tree) = tree_rx.try_recv() {
        if find(&tree, "toast").is_some() {
            saw_toast = true;
        }
    }
    assert!(saw_toast);
}

#[tokio::test]
async fn test_reveal_toggle_event() {
    let runtime = Runtime::new();
    let events = runtime.sender();
    let form = runtime.form();

    let handle = tokio::spawn(runtime.run(|_| {}));

    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events
        .send(FormEvent::ToggleReveal(FieldName::Password))
        .await
        .unwrap();
    events.send(FormEvent::Quit).await.unwrap();
    handle.await.unwrap().unwrap();

    assert!(form.password().is_revealed());
    assert_eq!(form.password().display_value(), "abcd1234");
}

#[tokio::test]
async fn test_reset_event_restores_initial_state() {
    let runtime = Runtime::new();
    let events = runtime.sender();
    let form = runtime.form();

    let handle = tokio::spawn(runtime.run(|_| {}));

    send_chars(&events, "bad").await;
    events.send(FormEvent::Key(Key::Tab)).await.unwrap();
    send_chars(&events, "abcd1234").await;
    events.send(FormEvent::Reset).await.unwrap();
    // Focus is back on email after a reset
    send_chars(&events, "a@b.co").await;
    events.send(FormEvent::Quit).await.unwrap();
    handle.await.unwrap().unwrap();

    assert_eq!(form.email().value(), "a@b.co");
    assert!(form.password().is_empty());
}
