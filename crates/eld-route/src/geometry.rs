//! Route polyline and linear interpolation along it.
//!
//! Segment lengths use the haversine distance; the position inside a segment
//! is interpolated linearly in lat/lon.  That is accurate enough to drop a
//! marker on a map, which is all this is for.

use eld_core::GeoPoint;

use crate::{RouteError, RouteResult};

/// An ordered polyline from the trip's start to its dropoff.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteGeometry {
    pub points: Vec<GeoPoint>,
}

impl RouteGeometry {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the haversine lengths of all segments, in miles.
    pub fn length_miles(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_miles(w[1]))
            .sum()
    }

    /// The point `miles` along the polyline.
    ///
    /// - a single-point geometry always returns that point;
    /// - `miles ≤ 0` returns the first point;
    /// - past the end returns the last point;
    /// - a zero-length segment that contains the distance returns its first
    ///   point.
    pub fn point_at_distance(&self, miles: f64) -> RouteResult<GeoPoint> {
        if miles.is_nan() {
            return Err(RouteError::InvalidDistance(miles));
        }
        let (&first, &last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(RouteError::EmptyGeometry),
        };
        if miles <= 0.0 {
            return Ok(first);
        }

        let mut travelled = 0.0;
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let segment = a.distance_miles(b);
            if travelled + segment >= miles {
                let ratio = if segment > 0.0 { (miles - travelled) / segment } else { 0.0 };
                return Ok(a.lerp(b, ratio));
            }
            travelled += segment;
        }
        Ok(last)
    }
}

impl From<Vec<GeoPoint>> for RouteGeometry {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}
