//! Transient toast notifications.
//!
//! A toast is a short message that dismisses itself after a fixed delay.
//! Only one toast is live at a time: a newer `show` replaces the current
//! one and moves the dismissal deadline, so overlapping calls resolve to
//! last-write-wins with no stacking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use log::debug;

use crate::wakeup::{WakeupHandle, WakeupSender};

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast notification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message to display (single line)
    pub message: String,
    /// Toast level (affects styling)
    pub level: ToastLevel,
    /// How long to show the toast
    pub duration: Duration,
}

impl Toast {
    /// Create a simple info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create a warning toast
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// The currently displayed toast and its dismissal deadline.
#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    expires_at: Instant,
}

/// Controller for the single live toast slot.
///
/// `show` is callable from anywhere that holds a clone; the event loop
/// reads `deadline` each iteration and calls `sweep` once it passes.
/// Because the deadline is re-read after every state change, a superseding
/// `show` simply moves it; no pending dismissal has to be cancelled.
#[derive(Debug)]
pub struct ToastController {
    active: Arc<RwLock<Option<ActiveToast>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    wakeup: WakeupHandle,
}

impl ToastController {
    /// Create a controller with an empty slot.
    pub fn new() -> Self {
        Self {
            active: Arc::new(RwLock::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
            wakeup: WakeupHandle::new(),
        }
    }

    /// Install a wakeup sender so `show` can wake an idle event loop.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
    }

    /// Show a toast, replacing any currently visible one.
    pub fn show(&self, toast: impl Into<Toast>) {
        let toast = toast.into();
        debug!("toast shown: {}", toast.message);
        if let Ok(mut guard) = self.active.write() {
            *guard = Some(ActiveToast {
                expires_at: Instant::now() + toast.duration,
                toast,
            });
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.wakeup.wake();
    }

    /// Dismiss the current toast immediately.
    pub fn dismiss(&self) {
        if let Ok(mut guard) = self.active.write()
            && guard.is_some()
        {
            *guard = None;
            self.dirty.store(true, Ordering::SeqCst);
            self.wakeup.wake();
        }
    }

    /// Check visibility against the real clock.
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    /// Check whether the toast would still be visible at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.active
            .read()
            .map(|guard| {
                guard
                    .as_ref()
                    .is_some_and(|active| now < active.expires_at)
            })
            .unwrap_or(false)
    }

    /// Get the toast that would be visible at `now` (if any).
    pub fn active_at(&self, now: Instant) -> Option<Toast> {
        self.active
            .read()
            .ok()
            .and_then(|guard| {
                guard
                    .as_ref()
                    .filter(|active| now < active.expires_at)
                    .map(|active| active.toast.clone())
            })
    }

    /// Get the current toast message (if one is in the slot).
    pub fn message(&self) -> Option<String> {
        self.active
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|active| active.toast.message.clone()))
    }

    /// The instant at which the current toast should be dismissed.
    pub fn deadline(&self) -> Option<Instant> {
        self.active
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|active| active.expires_at))
    }

    /// Clear the slot if its deadline has passed. Returns true if a toast
    /// was dismissed.
    pub fn sweep(&self, now: Instant) -> bool {
        if let Ok(mut guard) = self.active.write()
            && guard.as_ref().is_some_and(|active| now >= active.expires_at)
        {
            debug!("toast expired");
            *guard = None;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Check if the toast state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for ToastController {
    fn clone(&self) -> Self {
        Self {
            active: Arc::clone(&self.active),
            dirty: Arc::clone(&self.dirty),
            wakeup: self.wakeup.clone(),
        }
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new()
    }
}
