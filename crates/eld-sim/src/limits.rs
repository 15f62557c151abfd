//! Driving-limit state machine: the drive loop, rests, fuel stops and
//! on-duty tasks.

use log::debug;

use eld_core::{DutyStatus, EPSILON, StopEvent, StopKind};

use crate::{DutyObserver, DutySimulator};

impl DutySimulator {
    /// Drive `miles`, inserting rests and fuel stops as the caps require.
    ///
    /// Each iteration either takes a rest (a time cap is exhausted; no
    /// distance is consumed) or drives one chunk bounded by the remaining
    /// distance, the next fuel mark and the tighter of the two time caps.
    /// The fuel check runs only after a chunk completes.  A request at or
    /// below [`EPSILON`] miles does nothing.
    pub fn drive<O: DutyObserver>(&mut self, miles: f64, observer: &mut O) {
        let mut remaining = miles;
        while remaining > EPSILON {
            let drive_left = self.state.hours_drive_left(&self.rules);
            let window_left = self.state.hours_window_left(&self.rules);

            if drive_left <= EPSILON || window_left <= EPSILON {
                self.take_rest(observer);
                continue;
            }

            let max_miles = self.rules.miles_for_hours(drive_left.min(window_left));
            let chunk = remaining
                .min(self.state.miles_to_fuel(&self.rules))
                .min(max_miles);

            let hours = self.rules.hours_for_miles(chunk);
            self.record_duty(DutyStatus::Driving, hours, observer);
            self.state.trip_distance += chunk;
            self.state.since_fuel += chunk;
            remaining -= chunk;

            if self.state.since_fuel >= self.rules.fuel_interval_miles - EPSILON {
                self.refuel(observer);
            }
        }
    }

    /// Rest transition: sleeper-berth rest, then a fresh driving allowance
    /// and a new on-duty window opening the moment the rest ends.
    pub fn take_rest<O: DutyObserver>(&mut self, observer: &mut O) {
        debug!(
            "{}: rest at mile {:.1} ({:.2} h driven, window open {:.2} h)",
            self.state.clock,
            self.state.trip_distance,
            self.state.driving_today,
            self.state.window_elapsed()
        );
        self.push_stop(StopKind::Rest, observer);

        let hours = self.rules.rest_hours;
        self.record_duty(DutyStatus::SleeperBerth, hours, observer);
        self.state.driving_today = 0.0;
        self.state.window_start = self.state.clock;
    }

    /// Log an on-duty, not-driving task of `hours`.
    ///
    /// The task must fit in the current window: if it would overrun, the
    /// rest is taken first rather than in the middle of the task.
    pub fn perform_task<O: DutyObserver>(
        &mut self,
        what:     &str,
        hours:    f64,
        observer: &mut O,
    ) {
        if !self.task_fits(hours) {
            debug!(
                "{}: {what} of {hours} h does not fit in the window, resting first",
                self.state.clock
            );
            self.take_rest(observer);
        }
        debug!("{}: {what} ({hours} h on duty)", self.state.clock);
        self.record_duty(DutyStatus::OnDuty, hours, observer);
    }

    /// `true` if `hours` more of on-duty time stays inside the window.
    #[inline]
    pub fn task_fits(&self, hours: f64) -> bool {
        self.state.window_elapsed() + hours <= self.rules.duty_window_hours
    }

    /// Fuel stop at the current mile, then reset the fuel counter.
    fn refuel<O: DutyObserver>(&mut self, observer: &mut O) {
        let hours = self.rules.fuel_stop_hours;
        if !self.task_fits(hours) {
            self.take_rest(observer);
        }
        debug!(
            "{}: fuel stop at mile {:.1}",
            self.state.clock, self.state.trip_distance
        );
        self.push_stop(StopKind::Fuel, observer);
        self.record_duty(DutyStatus::OnDuty, hours, observer);
        self.state.since_fuel = 0.0;
    }

    fn push_stop<O: DutyObserver>(&mut self, kind: StopKind, observer: &mut O) {
        let stop = StopEvent {
            kind,
            cumulative_distance: self.state.trip_distance,
        };
        self.log.stops.push(stop);
        observer.on_stop(&stop, self.state.clock);
    }
}
