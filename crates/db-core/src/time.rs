//! Game time model.
//!
//! # Design
//!
//! Time is a composite of a day counter and an intraday tick fraction:
//!
//!   total_ticks = day * ticks_per_day + fract,   0 ≤ fract < ticks_per_day
//!
//! The day length is not a global constant; every arithmetic operation takes
//! an explicit [`DayLength`] so that the whole crate stays a pure function of
//! its inputs.  All accumulation is done in 64-bit (`u64`/`i64`) — the widest
//! sum is `max_day * ticks_per_day + fract`, which overflows 32 bits for long
//! games but not 64.  Division truncates; there is no rounding anywhere.

use std::fmt;

// ── DayLength ─────────────────────────────────────────────────────────────────

/// Ticks per simulated day — the fixed radix of [`GameTime`] arithmetic.
///
/// Cheap to copy; passed by value into every time operation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLength(pub u32);

impl DayLength {
    #[inline]
    pub fn ticks(self) -> u64 {
        self.0 as u64
    }

    /// Normalize an absolute tick count into a `GameTime`.
    #[inline]
    pub fn time(self, total_ticks: u64) -> GameTime {
        GameTime {
            day: (total_ticks / self.ticks()) as u32,
            fract: (total_ticks % self.ticks()) as u32,
        }
    }
}

// ── GameTime ──────────────────────────────────────────────────────────────────

/// An absolute point in game time: (day, intraday tick fraction).
///
/// Invariant: `fract < day_length` for every value produced by this module.
/// Field order matters — the derived `Ord` compares day first, then fract,
/// which is exactly the comparison the board needs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTime {
    pub day: u32,
    pub fract: u32,
}

impl GameTime {
    pub const ZERO: GameTime = GameTime { day: 0, fract: 0 };

    pub fn new(day: u32, fract: u32) -> Self {
        GameTime { day, fract }
    }

    /// Absolute tick count since day 0.
    #[inline]
    pub fn total_ticks(self, day_length: DayLength) -> u64 {
        self.day as u64 * day_length.ticks() + self.fract as u64
    }

    /// This time advanced by `ticks`, renormalized.
    #[inline]
    pub fn plus(self, ticks: u32, day_length: DayLength) -> GameTime {
        day_length.time(self.total_ticks(day_length) + ticks as u64)
    }

    /// Only the day component of `self + delta`, for coarse day-granularity
    /// comparisons.  `delta` may be negative (an early vehicle's lateness);
    /// the result saturates at day 0.
    #[inline]
    pub fn day_after(self, delta: i64, day_length: DayLength) -> u32 {
        let ticks = self.total_ticks(day_length) as i64 + delta;
        (ticks.max(0) as u64 / day_length.ticks()) as u32
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}+{}", self.day, self.fract)
    }
}

// ── GameClock ─────────────────────────────────────────────────────────────────

/// The host simulation clock, frozen for the current tick.
///
/// Handed to the board once per recompute; nothing in the board reads ambient
/// time.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// Current game time (day + intraday fraction).
    pub now: GameTime,
    /// Ticks per day for this game.
    pub day_length: DayLength,
}

impl GameClock {
    pub fn new(now: GameTime, day_length: DayLength) -> Self {
        Self { now, day_length }
    }

    /// Absolute tick count of `now`.
    #[inline]
    pub fn now_ticks(self) -> u64 {
        self.now.total_ticks(self.day_length)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ticks/day)", self.now, self.day_length.0)
    }
}
