//! Planning many independent trips.
//!
//! Every trip gets its own [`DutySimulator`][crate::DutySimulator]; nothing
//! is shared between runs, so the `parallel` feature only changes where the
//! runs execute, never their results.

use eld_core::{EldResult, HosRules, TripLegs, TripLog};

use crate::plan_trip;

/// Plan each trip in `trips` under the same `rules`.
///
/// Results come back in input order.  An invalid trip yields its own `Err`
/// without affecting the others.
pub fn plan_many(trips: &[TripLegs], rules: &HosRules) -> Vec<EldResult<TripLog>> {
    #[cfg(not(feature = "parallel"))]
    {
        trips.iter().map(|&legs| plan_trip(legs, rules)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        trips.par_iter().map(|&legs| plan_trip(legs, rules)).collect()
    }
}
