//! Trip request: what to plan, read from a JSON file or assembled from flags.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use eld_core::{HosRules, TripLegs};
use eld_route::{PlannedRoute, RouteResult, TripStops};

/// One planning request.
///
/// ```json
/// {
///   "start":   "34.05,-118.24",
///   "pickup":  "36.17,-115.14",
///   "dropoff": "33.45,-112.07",
///   "current_cycle_used": 12.5,
///   "rules": { "start_hour": 6.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// `"lat,lon"` of the truck's starting point.
    pub start:   String,
    pub pickup:  String,
    pub dropoff: String,

    /// Hours already used in the driver's cycle; echoed in the summary.
    #[serde(default)]
    pub current_cycle_used: f64,

    /// Explicit leg distances, overriding the provider's.
    #[serde(default)]
    pub leg_miles: Option<[f64; 2]>,

    /// A total to split evenly when the legs are unknown.
    #[serde(default)]
    pub total_miles: Option<f64>,

    /// Rule overrides; missing fields keep their defaults.
    #[serde(default)]
    pub rules: Option<HosRules>,
}

impl TripRequest {
    /// Load a request from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening trip request {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing trip request {}", path.display()))
    }

    pub fn stops(&self) -> RouteResult<TripStops> {
        TripStops::parse(&self.start, &self.pickup, &self.dropoff)
    }

    pub fn rules(&self) -> HosRules {
        self.rules.clone().unwrap_or_default()
    }

    /// Legs to simulate.
    ///
    /// Explicit `leg_miles` win, then an even split of `total_miles`, then
    /// the route's own legs.  A route that reports a distance but no legs is
    /// split evenly as well.
    pub fn legs(&self, route: &PlannedRoute) -> TripLegs {
        if let Some([to_pickup, to_dropoff]) = self.leg_miles {
            return TripLegs::new(to_pickup, to_dropoff);
        }
        if let Some(total) = self.total_miles {
            return TripLegs::split_evenly(total);
        }
        let legs = route.legs();
        if legs.is_empty() && route.distance_miles > 0.0 {
            warn!(
                "route has {:.2} mi but no leg distances; splitting evenly",
                route.distance_miles
            );
            return TripLegs::split_evenly(route.distance_miles);
        }
        legs
    }
}
