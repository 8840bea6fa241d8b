use std::time::{Duration, Instant};

/// Rate limiter that lets the snake take one step per `interval`, no matter
/// how often the screen is redrawn or input arrives
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct TickGate {
    interval: Duration,
    /// When the last step was admitted (or the gate was started).  `None`
    /// while the gate is stopped.
    last: Option<Instant>,
}

impl TickGate {
    /// Create a stopped gate
    pub(super) fn new(interval: Duration) -> TickGate {
        TickGate {
            interval,
            last: None,
        }
    }

    #[cfg(test)]
    pub(super) fn interval(&self) -> Duration {
        self.interval
    }

    /// Start (or restart) timing from `now`, so that the first step is
    /// admitted one full interval later
    pub(super) fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub(super) fn stop(&mut self) {
        self.last = None;
    }

    #[cfg(test)]
    pub(super) fn running(&self) -> bool {
        self.last.is_some()
    }

    /// How long until the next step is due.  A stopped gate is never due.
    pub(super) fn remaining(&self, now: Instant) -> Option<Duration> {
        let last = self.last?;
        Some(
            self.interval
                .saturating_sub(now.saturating_duration_since(last)),
        )
    }

    /// Return `true` if a step is due at `now`, and if so, begin timing the
    /// next interval from `now`
    pub(super) fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last = Some(now);
                true
            }
            _ => false,
        }
    }
}
