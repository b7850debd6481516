//! Runtime configuration.

use std::time::Duration;

use crate::toast::DEFAULT_TOAST_DURATION;

/// Event loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// How long the rejection toast stays visible.
    pub toast_duration: Duration,

    /// Capacity of the input event channel.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            toast_duration: DEFAULT_TOAST_DURATION,
            event_capacity: 32,
        }
    }
}

impl RuntimeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the toast duration.
    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Override the event channel capacity.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
