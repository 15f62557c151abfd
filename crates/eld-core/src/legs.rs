//! Trip input: the two driving legs handed over by the route provider.

use crate::{EldError, EldResult};

/// Distances of the two driving legs of a trip, in miles.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripLegs {
    /// Start → pickup.
    pub to_pickup:  f64,
    /// Pickup → dropoff.
    pub to_dropoff: f64,
}

impl TripLegs {
    #[inline]
    pub fn new(to_pickup: f64, to_dropoff: f64) -> Self {
        Self { to_pickup, to_dropoff }
    }

    /// Half of `total_miles` per leg.
    ///
    /// For callers that only know the total trip distance.  The simulator
    /// never applies this on its own; choosing it is the caller's policy.
    pub fn split_evenly(total_miles: f64) -> Self {
        let half = total_miles * 0.5;
        Self { to_pickup: half, to_dropoff: half }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.to_pickup + self.to_dropoff
    }

    /// `true` when neither leg carries any distance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to_pickup == 0.0 && self.to_dropoff == 0.0
    }

    /// Reject negative, NaN and infinite leg distances.
    pub fn validate(&self) -> EldResult<()> {
        for (what, value) in [("pickup leg", self.to_pickup), ("dropoff leg", self.to_dropoff)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EldError::InvalidDistance { what, value });
            }
        }
        Ok(())
    }
}
