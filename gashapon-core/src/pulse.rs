//! Transient "stretch" pulse shown after each draw.
//!
//! The pulse is a scheduled flip back to the idle look, driven by whatever
//! clock the host ticks with. It carries no engine state: cancelling it or
//! letting it lapse never changes what was drawn.

use std::time::Duration;

/// Default pulse length.
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(200);

/// A cancellable, restartable timer measured in host seconds.
#[derive(Debug, Clone)]
pub struct StretchPulse {
    duration: f64,
    deadline: Option<f64>,
}

impl Default for StretchPulse {
    fn default() -> Self {
        Self::new(DEFAULT_PULSE_DURATION)
    }
}

impl StretchPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.as_secs_f64(),
            deadline: None,
        }
    }

    /// Start the pulse at `now`, restarting it if it is already running.
    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.duration);
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Advance to `now`. Returns `true` exactly once, when the pulse lapses.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending pulse without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }
}
