//! The `DutySimulator` struct and the trip protocol.

use log::debug;

use eld_core::clock::HOURS_PER_DAY;
use eld_core::{DutyStatus, EPSILON, HosRules, TripLegs, TripLog};

use crate::{DutyObserver, SimulationState};

/// Simulates one trip's duty cycle.
///
/// `DutySimulator` holds all state for a single run and drives the trip
/// protocol:
///
/// 1. **Begin duty**: log `OFF` from midnight until `rules.start_hour` and
///    open the first on-duty window.
/// 2. **Leg 1**: [`drive`][Self::drive] to the pickup.
/// 3. **Pickup**: an on-duty task, preceded by a rest if it would not fit
///    in the current window.
/// 4. **Leg 2**: drive to the dropoff.
/// 5. **Dropoff**: same as pickup.
/// 6. **Close out**: `OFF` until midnight.
///
/// A simulator is consumed by [`run`][Self::run]; it carries no state
/// across trips.  Create via [`TripSimBuilder`][crate::TripSimBuilder].
pub struct DutySimulator {
    /// Limits and operating assumptions, validated by the builder.
    pub rules: HosRules,

    /// The two legs to drive.
    pub legs: TripLegs,

    /// Clock and counters.
    pub state: SimulationState,

    /// Days and stops written so far.
    pub(crate) log: TripLog,
}

impl DutySimulator {
    pub(crate) fn new(rules: HosRules, legs: TripLegs) -> Self {
        Self {
            rules,
            legs,
            state: SimulationState::new(),
            log: TripLog::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate the whole trip and return its log.
    ///
    /// Calls observer hooks for every entry and stop.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: DutyObserver>(mut self, observer: &mut O) -> TripLog {
        let legs = self.legs;

        self.begin_duty(observer);

        self.drive(legs.to_pickup, observer);
        let pickup = self.rules.pickup_hours;
        self.perform_task("pickup", pickup, observer);

        self.drive(legs.to_dropoff, observer);
        let dropoff = self.rules.dropoff_hours;
        self.perform_task("dropoff", dropoff, observer);

        self.close_out(observer);

        let log = self.into_log();
        debug!(
            "trip planned: {} day(s), {:.1} mi, {} stop(s)",
            log.days.len(),
            log.driven_miles,
            log.stops.len()
        );
        observer.on_trip_end(&log);
        log
    }

    /// Log `OFF` from midnight to the start hour and open the first window.
    ///
    /// Must be called once, before any driving.
    pub fn begin_duty<O: DutyObserver>(&mut self, observer: &mut O) {
        let start = self.rules.start_hour;
        self.record_duty(DutyStatus::Off, start, observer);
        self.state.window_start = self.state.clock;
    }

    /// Pad the current day with `OFF` up to midnight.
    ///
    /// A trip whose last task ends on a midnight (or within [`EPSILON`] of
    /// it) gets a full `OFF` day after it, so every run ends with at least
    /// one `OFF` entry.
    pub fn close_out<O: DutyObserver>(&mut self, observer: &mut O) {
        let mut pad = self.state.clock.room_left_today();
        if pad <= EPSILON {
            pad += HOURS_PER_DAY;
        }
        self.record_duty(DutyStatus::Off, pad, observer);
    }

    /// Read-only view of everything logged so far.
    pub fn log(&self) -> &TripLog {
        &self.log
    }

    /// Finish the run and take the log.
    pub fn into_log(self) -> TripLog {
        let mut log = self.log;
        log.driven_miles = self.state.trip_distance;
        log
    }
}
