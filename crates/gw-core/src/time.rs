//! Frame time model.
//!
//! # Design
//!
//! The host calls the world once per rendered frame and hands it a
//! `Duration` budget.  Actions consume budget in `std::time::Duration`
//! units, which are unsigned, so "negative time left" cannot be represented
//! at all.
//!
//! `Tick` counts frames.  It carries no duration of its own; `FrameClock`
//! accumulates the budgets actually handed out so logs can report simulated
//! time next to the frame counter.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ───────────────────────────────────────────────────────────────

/// Tracks the current frame and the simulated time handed out so far.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// The current frame, advanced by `FrameClock::advance()` each tick.
    pub current_tick: Tick,
    /// Sum of all budgets passed to `advance`.
    pub elapsed: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which lasted `dt`.
    #[inline]
    pub fn advance(&mut self, dt: Duration) {
        self.current_tick = self.current_tick + 1;
        self.elapsed += dt;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed.as_secs_f64())
    }
}
