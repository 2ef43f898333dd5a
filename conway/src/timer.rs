// timer.rs - Repeating generation deadline, independent of the frame loop

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct GenerationTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl GenerationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous schedule. The first tick is due one full interval from `now`.
    pub fn schedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
        log::debug!("Generation timer armed every {}ms", interval.as_millis());
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due. Ticks missed while nobody polled collapse into one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` while unscheduled.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
