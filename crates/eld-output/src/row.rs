//! Plain data row types written by output backends.

use eld_core::{DutyClock, DutyStatus, LogEntry, StopEvent, StopKind};

/// One duty-log entry, flattened with its day number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntryRow {
    pub day:    u32,
    pub status: DutyStatus,
    /// Local hours, `[0, 24)`.
    pub start:  f64,
    /// Local hours, `(0, 24]`.
    pub end:    f64,
}

impl LogEntryRow {
    pub fn new(day: u32, entry: &LogEntry) -> Self {
        Self { day, status: entry.status, start: entry.start, end: entry.end }
    }
}

/// One fuel or rest stop with the clock reading it began at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopRow {
    /// 1-based position of the stop in the trip.
    pub seq:                 u32,
    pub kind:                StopKind,
    pub cumulative_distance: f64,
    pub day:                 u32,
    pub hour:                u32,
    pub minute:              u32,
}

impl StopRow {
    pub fn new(seq: u32, stop: &StopEvent, at: DutyClock) -> Self {
        let (hour, minute) = at.local_hm();
        Self {
            seq,
            kind: stop.kind,
            cumulative_distance: stop.cumulative_distance,
            day: at.day(),
            hour,
            minute,
        }
    }

    /// `"HH:MM"` local time.
    pub fn local_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}
