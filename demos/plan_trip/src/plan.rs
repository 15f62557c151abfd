//! Route → simulator → markers, and the JSON shape of the result.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use eld_core::{DayLog, DutyStatus, GeoPoint, StopEvent, StopKind, TripLog, round_hundredths};
use eld_route::{Marker, RouteProvider, build_markers};
use eld_sim::{DutyObserver, TripSimBuilder};

use crate::request::TripRequest;

/// Everything a client needs to draw the route and the log sheets.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub start:          String,
    pub pickup:         String,
    pub dropoff:        String,
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub route_geometry: Vec<GeoPoint>,
    pub eld_logs:       Vec<DayLog>,
    pub stops:          Vec<StopEvent>,
    pub markers:        Vec<Marker>,
    pub summary:        TripSummary,
}

/// Totals over the whole trip, hours rounded to hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripSummary {
    pub days:               usize,
    pub driven_miles:       f64,
    pub driving_hours:      f64,
    pub on_duty_hours:      f64,
    /// Driving plus on-duty time.
    pub working_hours:      f64,
    pub off_duty_hours:     f64,
    pub sleeper_hours:      f64,
    pub fuel_stops:         usize,
    pub rest_stops:         usize,
    pub current_cycle_used: f64,
}

impl TripSummary {
    pub fn new(log: &TripLog, current_cycle_used: f64) -> Self {
        Self {
            days:               log.days.len(),
            driven_miles:       round_hundredths(log.driven_miles),
            driving_hours:      round_hundredths(log.total_driving_hours()),
            on_duty_hours:      round_hundredths(log.hours_in(DutyStatus::OnDuty)),
            working_hours:      round_hundredths(log.total_on_duty_hours()),
            off_duty_hours:     round_hundredths(log.hours_in(DutyStatus::Off)),
            sleeper_hours:      round_hundredths(log.hours_in(DutyStatus::SleeperBerth)),
            fuel_stops:         log.stops_of(StopKind::Fuel).count(),
            rest_stops:         log.stops_of(StopKind::Rest).count(),
            current_cycle_used,
        }
    }
}

/// Plan one request end to end.
///
/// `observer` sees every log entry and stop as the simulator produces them.
pub fn plan<P, O>(request: &TripRequest, provider: &P, observer: &mut O) -> Result<TripPlan>
where
    P: RouteProvider + ?Sized,
    O: DutyObserver,
{
    let stops = request.stops().context("invalid trip location")?;
    let route = provider.route(&stops).context("routing failed")?;

    let legs = request.legs(&route);
    let sim = TripSimBuilder::new(legs)
        .rules(request.rules())
        .build()
        .context("invalid trip parameters")?;
    let log = sim.run(observer);

    let markers = build_markers(&route, &log.stops).context("placing stop markers")?;
    let summary = TripSummary::new(&log, request.current_cycle_used);
    info!(
        "planned {:.1} mi over {} day(s): {} fuel stop(s), {} rest(s)",
        summary.driven_miles, summary.days, summary.fuel_stops, summary.rest_stops
    );

    Ok(TripPlan {
        start:          request.start.clone(),
        pickup:         request.pickup.clone(),
        dropoff:        request.dropoff.clone(),
        distance_miles: route.distance_miles,
        duration_hours: route.duration_hours,
        route_geometry: route.geometry.points,
        eld_logs:       log.days,
        stops:          log.stops,
        markers,
        summary,
    })
}
