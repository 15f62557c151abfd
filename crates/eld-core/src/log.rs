//! Duty-log records produced by one simulated trip.
//!
//! A [`TripLog`] is an append-only historical record: the simulator pushes
//! entries and stops in occurrence order and never edits a closed day.

use std::fmt;

use crate::DutyStatus;

// ── LogEntry ─────────────────────────────────────────────────────────────────

/// One duty interval inside a single calendar day.
///
/// `start` is in `[0, 24)`, `end` in `(0, 24]`, both rounded to hundredths
/// of an hour.  An entry never crosses midnight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub status: DutyStatus,
    pub start:  f64,
    pub end:    f64,
}

impl LogEntry {
    #[inline]
    pub fn new(status: DutyStatus, start: f64, end: f64) -> Self {
        Self { status, start, end }
    }

    /// Length of the interval in hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.2}-{:.2})", self.status, self.start, self.end)
    }
}

// ── DayLog ───────────────────────────────────────────────────────────────────

/// All entries logged on one calendar day, in time order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLog {
    /// 1-based day number.
    pub day:     u32,
    pub entries: Vec<LogEntry>,
}

impl DayLog {
    pub fn new(day: u32) -> Self {
        Self { day, entries: Vec::new() }
    }

    /// Display label shown above the log grid, e.g. `"Day 2"`.
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }

    /// Sum of all entry lengths; 24.0 for a closed-out day.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(LogEntry::hours).sum()
    }

    /// Hours spent in `status` on this day.
    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.status == status)
            .map(LogEntry::hours)
            .sum()
    }
}

// ── StopEvent ────────────────────────────────────────────────────────────────

/// Why the truck stopped along the route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopKind {
    #[cfg_attr(feature = "serde", serde(rename = "FUEL"))]
    Fuel,
    #[cfg_attr(feature = "serde", serde(rename = "REST"))]
    Rest,
}

impl StopKind {
    pub fn code(self) -> &'static str {
        match self {
            StopKind::Fuel => "FUEL",
            StopKind::Rest => "REST",
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fuel or rest stop at a cumulative distance along the trip.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopEvent {
    pub kind:                StopKind,
    /// Miles driven since the start of the trip when the stop began.
    pub cumulative_distance: f64,
}

// ── TripLog ──────────────────────────────────────────────────────────────────

/// The complete output of one simulation run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripLog {
    /// One `DayLog` per calendar day, day 1 first, no gaps.
    pub days:         Vec<DayLog>,
    /// Stops in occurrence order.
    pub stops:        Vec<StopEvent>,
    /// Total miles driven, at full precision (log boundaries are rounded).
    pub driven_miles: f64,
}

impl TripLog {
    /// Hours logged in `status` across every day.
    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.days.iter().map(|d| d.hours_in(status)).sum()
    }

    pub fn total_driving_hours(&self) -> f64 {
        self.hours_in(DutyStatus::Driving)
    }

    /// Driving plus on-duty (not driving) hours.
    pub fn total_on_duty_hours(&self) -> f64 {
        DutyStatus::ALL
            .into_iter()
            .filter(|s| s.is_working())
            .map(|s| self.hours_in(s))
            .sum()
    }

    /// Stops of one kind, in order.
    pub fn stops_of(&self, kind: StopKind) -> impl Iterator<Item = &StopEvent> {
        self.stops.iter().filter(move |s| s.kind == kind)
    }

    /// Every entry paired with its day number, in log order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &LogEntry)> {
        self.days
            .iter()
            .flat_map(|d| d.entries.iter().map(move |e| (d.day, e)))
    }
}
