//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter, where
//! one tick is one simulated second.  Using an integer tick as the canonical
//! time unit means all wait-time arithmetic is exact (no floating-point
//! drift) and comparisons are O(1).
//!
//! `SimClock` carries the current tick and converts elapsed ticks into
//! human-readable components for reporting.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (one tick = one simulated second).
///
/// Stored as `u64` to avoid overflow: at one tick per second a u64 lasts
/// ~585 billion years, far longer than any store stays open.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current simulation tick and maps ticks to elapsed time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock positioned at tick 0.
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0 (one tick = one second).
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0
    }

    /// Break elapsed time into (hours, minutes, seconds) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one simulation run.
///
/// Immutable once the run starts.  Typically built inline by the application
/// crate or loaded from a JSON file at the entry point.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of checkout stations.  Zero is a valid (degenerate) setup:
    /// nobody is ever served and the lines grow without bound.
    pub station_count: u32,

    /// Total ticks to simulate.  The run covers ticks `0 .. total_ticks`,
    /// with no draining of residual customers afterwards.
    pub total_ticks: u64,

    /// A new customer arrives at every tick that is a multiple of this
    /// value (ticks 0, I, 2I, …).  Must be at least 1.
    pub arrival_interval_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations the engine cannot run.
    ///
    /// The only hard requirement is a positive arrival interval; a zero
    /// interval would make `tick mod interval` undefined.
    pub fn validate(&self) -> crate::CoreResult<()> {
        if self.arrival_interval_ticks == 0 {
            return Err(crate::CoreError::Config(
                "arrival_interval_ticks must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Construct a `SimClock` positioned at the start of this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }
}
