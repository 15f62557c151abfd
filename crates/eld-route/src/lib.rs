//! `eld-route` — everything on either side of the duty-cycle simulator that
//! knows about geography.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geometry`]  | `RouteGeometry` polyline, length, point-at-distance       |
//! | [`provider`]  | `RouteProvider` trait, `TripStops`, `PlannedRoute`,       |
//! |               | `StraightLineProvider`                                    |
//! | [`markers`]   | `Marker`, `MarkerKind`, `build_markers`                   |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                            |
//!
//! The simulator never sees any of this: it receives two leg distances from a
//! [`PlannedRoute`] and hands back stop events, which [`build_markers`] pins
//! onto the route's geometry.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod geometry;
pub mod markers;
pub mod provider;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use geometry::RouteGeometry;
pub use markers::{Marker, MarkerKind, build_markers};
pub use provider::{PlannedRoute, RouteProvider, StraightLineProvider, TripStops};
