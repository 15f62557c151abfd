//! Simulation observer trait for progress reporting and data collection.

use eld_core::{DutyClock, LogEntry, StopEvent, TripLog};

/// Callbacks invoked by [`DutySimulator`][crate::DutySimulator] as the trip is
/// simulated.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — stop printer
///
/// ```rust,ignore
/// struct StopPrinter;
///
/// impl DutyObserver for StopPrinter {
///     fn on_stop(&mut self, stop: &StopEvent, at: DutyClock) {
///         println!("{at}: {} at mile {:.1}", stop.kind, stop.cumulative_distance);
///     }
/// }
/// ```
pub trait DutyObserver {
    /// Called for every entry written to a day's log, in log order.
    fn on_entry(&mut self, _day: u32, _entry: &LogEntry) {}

    /// Called when a fuel or rest stop begins.  `at` is the clock reading
    /// when the stop starts.
    fn on_stop(&mut self, _stop: &StopEvent, _at: DutyClock) {}

    /// Called once after the final day has been closed out.
    fn on_trip_end(&mut self, _log: &TripLog) {}
}

/// A [`DutyObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl DutyObserver for NoopObserver {}
