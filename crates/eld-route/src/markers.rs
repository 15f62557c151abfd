//! Map markers for a planned trip.

use std::fmt;

use eld_core::{GeoPoint, StopEvent, StopKind};

use crate::{PlannedRoute, RouteResult};

/// What a marker on the trip map stands for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MarkerKind {
    Start,
    Pickup,
    Dropoff,
    Fuel,
    Rest,
}

impl MarkerKind {
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Start   => "Start",
            MarkerKind::Pickup  => "Pickup",
            MarkerKind::Dropoff => "Dropoff",
            MarkerKind::Fuel    => "Fuel",
            MarkerKind::Rest    => "Rest",
        }
    }
}

impl From<StopKind> for MarkerKind {
    fn from(kind: StopKind) -> Self {
        match kind {
            StopKind::Fuel => MarkerKind::Fuel,
            StopKind::Rest => MarkerKind::Rest,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pin on the trip map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub kind:           MarkerKind,
    pub point:          GeoPoint,
    /// Trip distance of a fuel or rest stop; `None` for the trip's own stops.
    pub distance_miles: Option<f64>,
}

/// Markers for the start, pickup and dropoff, followed by one marker per
/// fuel or rest stop in `stops` order, each placed `cumulative_distance`
/// miles along the route geometry.
pub fn build_markers(route: &PlannedRoute, stops: &[StopEvent]) -> RouteResult<Vec<Marker>> {
    let mut markers = Vec::with_capacity(3 + stops.len());

    for (kind, point) in [
        (MarkerKind::Start,   route.stops.start),
        (MarkerKind::Pickup,  route.stops.pickup),
        (MarkerKind::Dropoff, route.stops.dropoff),
    ] {
        markers.push(Marker { kind, point, distance_miles: None });
    }

    for stop in stops {
        markers.push(Marker {
            kind:           stop.kind.into(),
            point:          route.geometry.point_at_distance(stop.cumulative_distance)?,
            distance_miles: Some(stop.cumulative_distance),
        });
    }

    Ok(markers)
}
