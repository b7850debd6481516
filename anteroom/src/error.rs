use thiserror::Error;

/// Errors surfaced by the event loop.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The input event channel closed before a `Quit` event arrived.
    #[error("event channel closed before shutdown was requested")]
    ChannelClosed,
}
