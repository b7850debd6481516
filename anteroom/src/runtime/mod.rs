//! Event loop wiring input events, form state, toasts, and re-rendering.
//!
//! Everything runs cooperatively on one task: validators and form
//! mutations execute synchronously inside a loop iteration, and the only
//! temporal element (the toast auto-dismiss) is a deadline the loop
//! sleeps on. State handles mutated from outside an iteration send a
//! wakeup so the loop re-checks its dirty flags.

mod config;
mod events;

pub use config::RuntimeConfig;
pub use events::{FormEvent, Key};

use std::time::Instant;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use crate::error::RuntimeError;
use crate::form::{EditOp, FieldName, REJECTED_MESSAGE, SignupForm, SubmitOutcome};
use crate::toast::{Toast, ToastController};
use crate::view::{Element, render};
use crate::wakeup::{self, WakeupReceiver};

/// Sleep until an optional deadline; pend forever when there is none.
///
/// This is used as a conditional branch in `tokio::select!`.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

/// What woke the loop up.
enum LoopStep {
    Event(FormEvent),
    Wakeup,
    ToastDeadline,
    Closed,
}

/// The event loop host.
///
/// Owns the form, the toast controller, the focus position, and both
/// channels. The view layer gets an event sender from [`Runtime::sender`]
/// and a rendered tree through the callback passed to [`Runtime::run`].
pub struct Runtime {
    config: RuntimeConfig,
    form: SignupForm,
    toasts: ToastController,
    focus: FieldName,
    events_tx: Option<mpsc::Sender<FormEvent>>,
    events_rx: mpsc::Receiver<FormEvent>,
    wakeup_rx: WakeupReceiver,
    /// Re-render needed for reasons outside the state handles (focus moves)
    dirty: bool,
}

impl Runtime {
    /// Create a runtime with default configuration.
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    /// Create a runtime with the given configuration.
    pub fn with_config(config: RuntimeConfig) -> Self {
        let (events_tx, events_rx) = mpsc::channel(config.event_capacity);
        let (wakeup_tx, wakeup_rx) = wakeup::channel();

        let toasts = ToastController::new();
        toasts.install_wakeup(wakeup_tx);

        Self {
            config,
            form: SignupForm::new(),
            toasts,
            focus: FieldName::Email,
            events_tx: Some(events_tx),
            events_rx,
            wakeup_rx,
            dirty: false,
        }
    }

    /// A shared handle to the form state.
    pub fn form(&self) -> SignupForm {
        self.form.clone()
    }

    /// A shared handle to the toast controller.
    pub fn toasts(&self) -> ToastController {
        self.toasts.clone()
    }

    /// The sender the view layer pushes input events into.
    pub fn sender(&self) -> mpsc::Sender<FormEvent> {
        self.events_tx
            .clone()
            .expect("sender is available until run() starts")
    }

    /// The currently focused field.
    pub fn focus(&self) -> FieldName {
        self.focus
    }

    /// Run the event loop until a `Quit` event arrives.
    ///
    /// `view` is called with a freshly rendered tree once at startup and
    /// again after every observable state change.
    pub async fn run<F>(mut self, mut view: F) -> Result<(), RuntimeError>
    where
        F: FnMut(&Element),
    {
        info!("event loop started");

        // Drop our own sender so the loop observes closure once the last
        // external sender goes away
        self.events_tx.take();

        // Initial render so the view isn't blank while the loop idles
        let mut force_render = true;

        loop {
            if force_render || self.dirty || self.form.is_dirty() || self.toasts.is_dirty() {
                let tree = render(&self.form, &self.toasts, Instant::now());
                view(&tree);
                self.form.clear_dirty();
                self.toasts.clear_dirty();
                self.dirty = false;
                force_render = false;
            }

            let step = {
                let deadline = self.toasts.deadline();
                tokio::select! {
                    event = self.events_rx.recv() => match event {
                        Some(event) => LoopStep::Event(event),
                        None => LoopStep::Closed,
                    },
                    _ = self.wakeup_rx.recv() => LoopStep::Wakeup,
                    _ = sleep_until_optional(deadline) => LoopStep::ToastDeadline,
                }
            };

            match step {
                LoopStep::Event(FormEvent::Quit) => break,
                LoopStep::Event(event) => self.apply(event),
                LoopStep::Wakeup => {}
                LoopStep::ToastDeadline => {
                    self.toasts.sweep(Instant::now());
                }
                LoopStep::Closed => {
                    return Err(RuntimeError::ChannelClosed);
                }
            }
        }

        info!("event loop stopped");
        Ok(())
    }

    /// Apply one input event to the state.
    fn apply(&mut self, event: FormEvent) {
        debug!("event: {:?}", event);
        match event {
            FormEvent::Key(key) => self.handle_key(key),
            FormEvent::Submit => self.submit(),
            FormEvent::ToggleReveal(name) => self.form.field(name).toggle_reveal(),
            FormEvent::Reset => {
                self.form.reset();
                self.focus = FieldName::Email;
                self.dirty = true;
            }
            FormEvent::Quit => {}
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Tab => {
                self.focus = self.focus.next();
                self.dirty = true;
            }
            Key::BackTab => {
                self.focus = self.focus.prev();
                self.dirty = true;
            }
            Key::Enter => self.submit(),
            Key::Char(c) => self.form.apply_edit(self.focus, EditOp::Insert(c)),
            Key::Backspace => self.form.apply_edit(self.focus, EditOp::Backspace),
            Key::Delete => self.form.apply_edit(self.focus, EditOp::Delete),
            Key::Left => self.form.apply_edit(self.focus, EditOp::CursorLeft),
            Key::Right => self.form.apply_edit(self.focus, EditOp::CursorRight),
            Key::Home => self.form.apply_edit(self.focus, EditOp::CursorHome),
            Key::End => self.form.apply_edit(self.focus, EditOp::CursorEnd),
        }
    }

    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::LoggedIn => {}
            SubmitOutcome::Rejected => {
                self.toasts.show(
                    Toast::error(REJECTED_MESSAGE).with_duration(self.config.toast_duration),
                );
            }
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
