//! `eld-sim` — Hours-of-Service duty-cycle simulator.
//!
//! # Trip protocol
//!
//! ```text
//! OFF from 00:00 until the start hour (08:00 by default)
//! ① drive(leg 1)      — DRIVING chunks, fuel stops, rests
//! ② pickup            — rest first if 1 h would overrun the 14 h window
//! ③ drive(leg 2)
//! ④ dropoff           — same preemptive rest check
//! ⑤ close out         — OFF until midnight so every day sums to 24 h
//! ```
//!
//! # Drive loop
//!
//! Before every chunk three caps are re-evaluated: hours driven since the last
//! rest (11), hours since the on-duty window opened (14) and miles since the
//! last fuel stop (1000).  An exhausted time cap triggers a 10 h sleeper-berth
//! rest; reaching the fuel mark triggers a 0.5 h on-duty refuel.  All limits
//! come from [`eld_core::HosRules`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `plan_many` fans trips out over Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eld_core::TripLegs;
//! use eld_sim::{NoopObserver, TripSimBuilder};
//!
//! let sim = TripSimBuilder::new(TripLegs::new(600.0, 600.0)).build()?;
//! let log = sim.run(&mut NoopObserver);
//! ```

pub mod batch;
pub mod builder;
pub mod limits;
pub mod observer;
pub mod recorder;
pub mod sim;
pub mod state;
pub mod trip;


pub use batch::plan_many;
pub use builder::TripSimBuilder;
pub use observer::{DutyObserver, NoopObserver};
pub use sim::DutySimulator;
pub use state::SimulationState;
pub use trip::plan_trip;
