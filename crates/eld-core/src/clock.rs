//! Duty clock.
//!
//! # Design
//!
//! Time is an absolute `f64` count of hours since day 1, 00:00.  The calendar
//! view is derived, never stored:
//!
//!   day        = floor(hours / 24) + 1
//!   local_time = hours mod 24
//!
//! Floating-point hours keep driving-time arithmetic direct (miles / mph)
//! at the cost of residue; every loop that consumes time or distance stops
//! once what is left falls below [`EPSILON`].

use std::fmt;

/// "Effectively zero" for remaining hours, remaining miles and the fuel mark.
pub const EPSILON: f64 = 0.001;

/// Hours in one log-sheet day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Round to hour-and-hundredths, the granularity of a log-sheet boundary.
#[inline]
pub fn round_hundredths(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

// ── DutyClock ─────────────────────────────────────────────────────────────────

/// Absolute simulation clock in hours since day 1, 00:00.
///
/// `DutyClock` is `Copy`; the simulator owns exactly one and advances it only
/// while recording a duty interval.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyClock {
    hours: f64,
}

impl DutyClock {
    /// Day 1, 00:00.
    pub const ZERO: DutyClock = DutyClock { hours: 0.0 };

    /// A clock reading `hours` after day 1, 00:00.
    #[inline]
    pub fn at(hours: f64) -> Self {
        Self { hours }
    }

    /// Absolute hours since day 1, 00:00.
    #[inline]
    pub fn hours(self) -> f64 {
        self.hours
    }

    /// The 1-based calendar day this reading falls on.
    #[inline]
    pub fn day(self) -> u32 {
        (self.hours / HOURS_PER_DAY).floor() as u32 + 1
    }

    /// Hour of the day in `[0, 24)`.
    #[inline]
    pub fn local_time(self) -> f64 {
        self.hours.rem_euclid(HOURS_PER_DAY)
    }

    /// Hours left before the next midnight; always in `(0, 24]`.
    #[inline]
    pub fn room_left_today(self) -> f64 {
        HOURS_PER_DAY - self.local_time()
    }

    /// Hours elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: DutyClock) -> f64 {
        self.hours - earlier.hours
    }

    /// Move the clock forward by `hours`.
    #[inline]
    pub fn advance(&mut self, hours: f64) {
        self.hours += hours;
    }

    /// Break the local time into (hour, minute) for human-readable logging.
    pub fn local_hm(self) -> (u32, u32) {
        let minutes = (self.local_time() * 60.0).round() as u32;
        // 23:59.7 rounds to 24:00; keep it on the same day.
        let minutes = minutes.min(24 * 60 - 1);
        (minutes / 60, minutes % 60)
    }
}

impl std::ops::Sub for DutyClock {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: DutyClock) -> f64 {
        self.since(rhs)
    }
}

impl fmt::Display for DutyClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.local_hm();
        write!(f, "day {} {:02}:{:02}", self.day(), h, m)
    }
}
