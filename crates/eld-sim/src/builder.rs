//! Fluent builder for constructing a [`DutySimulator`].

use eld_core::{EldResult, HosRules, TripLegs};

use crate::DutySimulator;

/// Fluent builder for [`DutySimulator`].
///
/// # Required inputs
///
/// - [`TripLegs`] — the two leg distances from the route provider
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                |
/// |---------------|------------------------|
/// | `.rules(r)`   | `HosRules::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let sim = TripSimBuilder::new(TripLegs::new(320.0, 910.0))
///     .rules(rules)
///     .build()?;
/// let log = sim.run(&mut NoopObserver);
/// ```
pub struct TripSimBuilder {
    legs:  TripLegs,
    rules: Option<HosRules>,
}

impl TripSimBuilder {
    /// Create a builder for a trip with the given legs.
    pub fn new(legs: TripLegs) -> Self {
        Self { legs, rules: None }
    }

    /// Replace the default rule set.
    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Validate the legs and the rules and return a ready-to-run
    /// [`DutySimulator`].
    ///
    /// Negative or non-finite leg distances are rejected here, before any
    /// simulation starts.
    pub fn build(self) -> EldResult<DutySimulator> {
        self.legs.validate()?;

        let rules = self.rules.unwrap_or_default();
        rules.validate()?;

        Ok(DutySimulator::new(rules, self.legs))
    }
}
