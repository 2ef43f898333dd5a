// session.rs - Mutable state owned by the interaction controller

use std::time::Duration;

/// Time between generation ticks, kept within `[MIN_MS, MAX_MS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationInterval(u32);

impl GenerationInterval {
    pub const MIN_MS: u32 = 20;
    pub const MAX_MS: u32 = 2000;
    pub const STEP_MS: u32 = 20;
    pub const DEFAULT_MS: u32 = 100;

    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(Self::MIN_MS, Self::MAX_MS))
    }

    pub fn millis(self) -> u32 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// One step slower, never past `MAX_MS`.
    pub fn lengthen(&mut self) {
        self.0 = (self.0 + Self::STEP_MS).min(Self::MAX_MS);
    }

    /// One step faster, never below `MIN_MS`. At the floor this is a no-op.
    pub fn shorten(&mut self) {
        self.0 = self.0.saturating_sub(Self::STEP_MS).max(Self::MIN_MS);
    }
}

impl Default for GenerationInterval {
    fn default() -> Self {
        Self(Self::DEFAULT_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub running: bool,
    pub generation_paused: bool,
    pub mouse_revive: bool,
    pub mouse_kill: bool,
    pub interval: GenerationInterval,
}

impl SessionState {
    pub fn new(interval: GenerationInterval) -> Self {
        Self {
            running: true,
            generation_paused: true,
            mouse_revive: false,
            mouse_kill: false,
            interval,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.generation_paused = !self.generation_paused;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(GenerationInterval::default())
    }
}
