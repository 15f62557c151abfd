//! Route provider trait and the offline straight-line provider.
//!
//! # Pluggability
//!
//! The planning pipeline asks for a route through the [`RouteProvider`]
//! trait, so an application can plug in a directions service without
//! touching the simulator.  [`StraightLineProvider`] needs no network and is
//! what the demo binary and the tests use.

use std::str::FromStr;

use log::debug;

use eld_core::{GeoPoint, TripLegs, round_hundredths};

use crate::{RouteGeometry, RouteResult};

// ── TripStops ─────────────────────────────────────────────────────────────────

/// The three places a trip visits, in order.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripStops {
    pub start:   GeoPoint,
    pub pickup:  GeoPoint,
    pub dropoff: GeoPoint,
}

impl TripStops {
    pub fn new(start: GeoPoint, pickup: GeoPoint, dropoff: GeoPoint) -> Self {
        Self { start, pickup, dropoff }
    }

    /// Parse three `"lat,lon"` literals.
    ///
    /// Free-text addresses need a geocoder, which this crate does not have.
    pub fn parse(start: &str, pickup: &str, dropoff: &str) -> RouteResult<Self> {
        Ok(Self {
            start:   GeoPoint::from_str(start)?,
            pickup:  GeoPoint::from_str(pickup)?,
            dropoff: GeoPoint::from_str(dropoff)?,
        })
    }
}

// ── PlannedRoute ──────────────────────────────────────────────────────────────

/// What a provider returns for one trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedRoute {
    /// Polyline from start through pickup to dropoff.
    pub geometry:       RouteGeometry,
    /// Start → pickup and pickup → dropoff, in miles.
    pub leg_miles:      [f64; 2],
    /// Total distance, rounded to hundredths of a mile.
    pub distance_miles: f64,
    /// Provider's driving-time estimate, rounded to hundredths of an hour.
    pub duration_hours: f64,
    pub stops:          TripStops,
}

impl PlannedRoute {
    /// The leg distances as the simulator's input.
    pub fn legs(&self) -> TripLegs {
        TripLegs::new(self.leg_miles[0], self.leg_miles[1])
    }
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Pluggable route source.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a host can share one provider
/// across threads planning independent trips.
pub trait RouteProvider: Send + Sync {
    /// Route from `stops.start` via `stops.pickup` to `stops.dropoff`.
    fn route(&self, stops: &TripStops) -> RouteResult<PlannedRoute>;
}

// ── StraightLineProvider ──────────────────────────────────────────────────────

/// Great-circle "route" straight through the three stops.
///
/// The geometry is the three points themselves, each leg is its haversine
/// distance and the duration assumes a constant speed.  It underestimates
/// road distance, but keeps the whole pipeline usable offline.
#[derive(Clone, Debug)]
pub struct StraightLineProvider {
    /// Speed used for `duration_hours`.  Default: 60 mph.
    pub speed_mph: f64,
}

impl Default for StraightLineProvider {
    fn default() -> Self {
        Self { speed_mph: 60.0 }
    }
}

impl RouteProvider for StraightLineProvider {
    fn route(&self, stops: &TripStops) -> RouteResult<PlannedRoute> {
        let d1 = stops.start.distance_miles(stops.pickup);
        let d2 = stops.pickup.distance_miles(stops.dropoff);
        let total = d1 + d2;
        debug!("straight-line route: {d1:.1} mi + {d2:.1} mi");

        Ok(PlannedRoute {
            geometry:       RouteGeometry::new(vec![stops.start, stops.pickup, stops.dropoff]),
            leg_miles:      [d1, d2],
            distance_miles: round_hundredths(total),
            duration_hours: round_hundredths(total / self.speed_mph),
            stops:          *stops,
        })
    }
}
