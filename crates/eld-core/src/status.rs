//! Duty-status enum shared by the simulator, the output writers and the
//! marker builder.
//!
//! The set is closed: a driver's log sheet has exactly four rows.

use std::fmt;
use std::str::FromStr;

use crate::EldError;

/// What the driver is doing during a logged interval.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    /// Off duty.
    #[cfg_attr(feature = "serde", serde(rename = "OFF"))]
    Off,
    /// Sleeper-berth rest.
    #[cfg_attr(feature = "serde", serde(rename = "SB"))]
    SleeperBerth,
    /// Behind the wheel.
    #[cfg_attr(feature = "serde", serde(rename = "DRIVING"))]
    Driving,
    /// On duty, not driving: pickup, dropoff, fueling.
    #[cfg_attr(feature = "serde", serde(rename = "ON"))]
    OnDuty,
}

impl DutyStatus {
    /// All four statuses in log-sheet row order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::Off,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// The short code printed on log sheets and written to output files.
    pub fn code(self) -> &'static str {
        match self {
            DutyStatus::Off          => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving      => "DRIVING",
            DutyStatus::OnDuty       => "ON",
        }
    }

    /// `true` for statuses that count against the 14-hour on-duty window
    /// as work (driving or on-duty tasks).
    #[inline]
    pub fn is_working(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DutyStatus {
    type Err = EldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "OFF"     => Ok(DutyStatus::Off),
            "SB"      => Ok(DutyStatus::SleeperBerth),
            "DRIVING" => Ok(DutyStatus::Driving),
            "ON"      => Ok(DutyStatus::OnDuty),
            other => Err(EldError::Parse(format!(
                "invalid duty status {other:?}: expected OFF, SB, DRIVING or ON"
            ))),
        }
    }
}
