//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude: stop markers are placed by
//! interpolating across segments hundreds of miles long, where `f32`
//! rounding becomes visible on a map.

use std::fmt;
use std::str::FromStr;

use crate::EldError;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3_956.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
    }

    /// Point at fraction `t` of the straight line from `self` to `other`
    /// in lat/lon space.  `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses a `"lat,lon"` literal such as `"34.0522, -118.2437"`.
impl FromStr for GeoPoint {
    type Err = EldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            EldError::Parse(format!(
                "invalid coordinate {s:?}: expected \"lat,lon\" in decimal degrees"
            ))
        };

        let (lat, lon) = s.trim().split_once(',').ok_or_else(parse_err)?;
        let lat: f64 = lat.trim().parse().map_err(|_| parse_err())?;
        let lon: f64 = lon.trim().parse().map_err(|_| parse_err())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(EldError::Parse(format!(
                "coordinate {s:?} out of range: lat must be in [-90, 90], lon in [-180, 180]"
            )));
        }
        Ok(GeoPoint { lat, lon })
    }
}
