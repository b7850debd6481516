//! Wakeup channel for passive re-rendering.
//!
//! The event loop blocks while idle. State handles that can be mutated
//! from outside a loop iteration (the toast controller, form clones held
//! by async tasks) send a wakeup so the loop re-checks dirty flags.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Sender half of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. A full or closed channel is ignored: full means a
    /// wakeup is already pending, closed means the loop is shutting down.
    pub fn wake(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal, then drain any redundant buffered ones so
    /// a burst of mutations collapses into a single render.
    pub async fn recv(&mut self) -> Option<()> {
        let signal = self.rx.recv().await;
        while self.rx.try_recv().is_ok() {}
        signal
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(8);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// Handle for installing a wakeup sender after construction.
///
/// State handles are created before the loop exists; the runtime installs
/// the sender when it takes ownership of them.
#[derive(Debug, Default, Clone)]
pub struct WakeupHandle {
    inner: Arc<Mutex<Option<WakeupSender>>>,
}

impl WakeupHandle {
    /// Create a new empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a wakeup sender.
    pub fn install(&self, sender: WakeupSender) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(sender);
        }
    }

    /// Send a wakeup signal if a sender is installed.
    pub fn wake(&self) {
        if let Ok(guard) = self.inner.lock()
            && let Some(sender) = guard.as_ref()
        {
            sender.wake();
        }
    }
}
