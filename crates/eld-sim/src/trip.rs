//! One-call trip planning.

use eld_core::{EldResult, HosRules, TripLegs, TripLog};

use crate::{NoopObserver, TripSimBuilder};

/// Validate, simulate and return the log for one trip.
///
/// Shorthand for building a [`DutySimulator`][crate::DutySimulator] and
/// running it with [`NoopObserver`].
pub fn plan_trip(legs: TripLegs, rules: &HosRules) -> EldResult<TripLog> {
    let sim = TripSimBuilder::new(legs).rules(rules.clone()).build()?;
    Ok(sim.run(&mut NoopObserver))
}
