//! Mutable per-run simulation state.

use eld_core::{DutyClock, HosRules};

/// The counters one simulation run evolves.
///
/// Owned exclusively by a single [`DutySimulator`][crate::DutySimulator] and
/// only changed by recording a duty interval, driving a chunk, refueling or
/// taking a rest.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    /// Absolute time since day 1, 00:00.
    pub clock: DutyClock,

    /// Day of the most recently written entry.  Lags `clock.day()` until
    /// something is actually logged on the new day.
    pub day: u32,

    /// Hours driven since the last rest.
    pub driving_today: f64,

    /// When the current 14-hour on-duty window opened.
    pub window_start: DutyClock,

    /// Miles driven since the start of the trip.
    pub trip_distance: f64,

    /// Miles driven since the last fuel stop.
    pub since_fuel: f64,
}

impl SimulationState {
    /// Fresh state at day 1, 00:00 with nothing driven.
    pub fn new() -> Self {
        Self {
            clock:         DutyClock::ZERO,
            day:           1,
            driving_today: 0.0,
            window_start:  DutyClock::ZERO,
            trip_distance: 0.0,
            since_fuel:    0.0,
        }
    }

    /// Driving hours left before the driving cap forces a rest.
    #[inline]
    pub fn hours_drive_left(&self, rules: &HosRules) -> f64 {
        rules.max_driving_hours - self.driving_today
    }

    /// Hours left before the on-duty window closes.
    #[inline]
    pub fn hours_window_left(&self, rules: &HosRules) -> f64 {
        self.window_start.hours() + rules.duty_window_hours - self.clock.hours()
    }

    /// Hours elapsed since the on-duty window opened.
    #[inline]
    pub fn window_elapsed(&self) -> f64 {
        self.clock - self.window_start
    }

    /// Miles left before the next fuel stop is due.
    #[inline]
    pub fn miles_to_fuel(&self, rules: &HosRules) -> f64 {
        rules.fuel_interval_miles - self.since_fuel
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
