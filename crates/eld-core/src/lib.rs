//! `eld-core` — foundational types for the `eld` trip planner.
//!
//! This crate is a dependency of every other `eld-*` crate.  It intentionally
//! has no `eld-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`status`]  | `DutyStatus` enum (`OFF`, `SB`, `DRIVING`, `ON`)          |
//! | [`log`]     | `LogEntry`, `DayLog`, `StopEvent`, `StopKind`, `TripLog`  |
//! | [`legs`]    | `TripLegs` — the simulator's input                        |
//! | [`clock`]   | `DutyClock`, `EPSILON`, `round_hundredths`                |
//! | [`rules`]   | `HosRules` — every regulatory and operational constant    |
//! | [`geo`]     | `GeoPoint`, haversine distance in miles                   |
//! | [`error`]   | `EldError`, `EldResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod error;
pub mod geo;
pub mod legs;
pub mod log;
pub mod rules;
pub mod status;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{DutyClock, EPSILON, round_hundredths};
pub use error::{EldError, EldResult};
pub use geo::GeoPoint;
pub use legs::TripLegs;
pub use log::{DayLog, LogEntry, StopEvent, StopKind, TripLog};
pub use rules::HosRules;
pub use status::DutyStatus;
