//! Hours-of-Service rule set and trip operating assumptions.
//!
//! Every number the simulator enforces or assumes lives here so that callers
//! can load an alternative rule set (e.g. from a JSON file in the demo
//! binary) without touching the state machine.  [`HosRules::default`] is the
//! property-carrying interstate rule set the planner is built around.

use crate::clock::{EPSILON, HOURS_PER_DAY};
use crate::{EldError, EldResult};

/// Regulatory limits and operating assumptions for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Maximum driving hours between two rests.  Default: 11.
    pub max_driving_hours: f64,

    /// Length of the on-duty window opened at the end of each rest.
    /// Default: 14.
    pub duty_window_hours: f64,

    /// Length of the mandatory sleeper-berth rest.  Default: 10.
    pub rest_hours: f64,

    /// Distance between scheduled fuel stops.  Default: 1000 miles.
    pub fuel_interval_miles: f64,

    /// On-duty time spent refueling.  Default: 0.5 h.
    pub fuel_stop_hours: f64,

    /// On-duty time spent at the pickup location.  Default: 1 h.
    pub pickup_hours: f64,

    /// On-duty time spent at the dropoff location.  Default: 1 h.
    pub dropoff_hours: f64,

    /// Constant driving speed; the planner has no variable-speed model.
    /// Default: 60 mph.
    pub average_speed_mph: f64,

    /// Hour of day 1 at which duty starts; everything before it is logged
    /// off duty.  Default: 8 (08:00).
    pub start_hour: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            max_driving_hours:   11.0,
            duty_window_hours:   14.0,
            rest_hours:          10.0,
            fuel_interval_miles: 1_000.0,
            fuel_stop_hours:     0.5,
            pickup_hours:        1.0,
            dropoff_hours:       1.0,
            average_speed_mph:   60.0,
            start_hour:          8.0,
        }
    }
}

impl HosRules {
    /// Reject rule sets under which the drive loop could not make progress.
    ///
    /// Limits, the rest, the fuel interval and the speed must all be finite
    /// and larger than [`EPSILON`]; task durations must be finite and
    /// non-negative; the start hour must fall inside day 1.
    pub fn validate(&self) -> EldResult<()> {
        let positive = [
            ("max_driving_hours",   self.max_driving_hours),
            ("duty_window_hours",   self.duty_window_hours),
            ("rest_hours",          self.rest_hours),
            ("fuel_interval_miles", self.fuel_interval_miles),
            ("average_speed_mph",   self.average_speed_mph),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= EPSILON {
                return Err(EldError::Config(format!(
                    "{name} must be a finite value above {EPSILON}, got {value}"
                )));
            }
        }

        let non_negative = [
            ("fuel_stop_hours", self.fuel_stop_hours),
            ("pickup_hours",    self.pickup_hours),
            ("dropoff_hours",   self.dropoff_hours),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EldError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !(0.0..HOURS_PER_DAY).contains(&self.start_hour) {
            return Err(EldError::Config(format!(
                "start_hour must be in [0, 24), got {}",
                self.start_hour
            )));
        }

        // A task longer than the whole window could never be placed.
        let longest_task = self
            .pickup_hours
            .max(self.dropoff_hours)
            .max(self.fuel_stop_hours);
        if longest_task > self.duty_window_hours {
            return Err(EldError::Config(format!(
                "on-duty task of {longest_task} h cannot fit in a {} h duty window",
                self.duty_window_hours
            )));
        }

        Ok(())
    }

    /// Miles covered in `hours` of driving.
    #[inline]
    pub fn miles_for_hours(&self, hours: f64) -> f64 {
        hours * self.average_speed_mph
    }

    /// Driving hours needed to cover `miles`.
    #[inline]
    pub fn hours_for_miles(&self, miles: f64) -> f64 {
        miles / self.average_speed_mph
    }
}
