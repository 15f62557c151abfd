//! Tests for the plan_trip binary.

use crate::request::TripRequest;

/// Start, pickup and dropoff ten degrees apart on the 90° W meridian.
fn meridian_request() -> TripRequest {
    TripRequest {
        start:              "25.0,-90.0".to_owned(),
        pickup:             "35.0,-90.0".to_owned(),
        dropoff:            "45.0,-90.0".to_owned(),
        current_cycle_used: 6.5,
        leg_miles:          None,
        total_miles:        None,
        rules:              None,
    }
}

// ── Request ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod request_tests {
    use super::*;
    use eld_core::{GeoPoint, HosRules, TripLegs};
    use eld_route::{PlannedRoute, RouteGeometry, TripStops};

    fn route_with(leg_miles: [f64; 2], distance_miles: f64) -> PlannedRoute {
        let p = GeoPoint::new(30.0, -90.0);
        PlannedRoute {
            geometry: RouteGeometry::new(vec![p]),
            leg_miles,
            distance_miles,
            duration_hours: distance_miles / 60.0,
            stops: TripStops::new(p, p, p),
        }
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{ "start": "1,2", "pickup": "3,4", "dropoff": "5,6" }"#;
        let req: TripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.current_cycle_used, 0.0);
        assert!(req.leg_miles.is_none());
        assert_eq!(req.rules(), HosRules::default());
        assert_eq!(req.stops().unwrap().dropoff, GeoPoint::new(5.0, 6.0));
    }

    #[test]
    fn partial_rules_keep_other_defaults() {
        let json = r#"{
            "start": "1,2", "pickup": "3,4", "dropoff": "5,6",
            "current_cycle_used": 12.5,
            "rules": { "start_hour": 6.0 }
        }"#;
        let req: TripRequest = serde_json::from_str(json).unwrap();
        let rules = req.rules();
        assert_eq!(rules.start_hour, 6.0);
        assert_eq!(rules.max_driving_hours, 11.0);
        assert_eq!(req.current_cycle_used, 12.5);
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, serde_json::to_string(&meridian_request()).unwrap()).unwrap();
        assert_eq!(TripRequest::from_path(&path).unwrap(), meridian_request());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TripRequest::from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"), "got {err}");
    }

    #[test]
    fn leg_precedence() {
        let route = route_with([100.0, 200.0], 300.0);
        let mut req = meridian_request();
        assert_eq!(req.legs(&route), TripLegs::new(100.0, 200.0));

        req.total_miles = Some(50.0);
        assert_eq!(req.legs(&route), TripLegs::new(25.0, 25.0));

        req.leg_miles = Some([10.0, 20.0]);
        assert_eq!(req.legs(&route), TripLegs::new(10.0, 20.0));
    }

    #[test]
    fn distance_without_legs_is_split_evenly() {
        let req = meridian_request();
        assert_eq!(req.legs(&route_with([0.0, 0.0], 500.0)), TripLegs::new(250.0, 250.0));
        assert!(req.legs(&route_with([0.0, 0.0], 0.0)).is_empty());
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use super::*;
    use eld_core::StopKind;
    use eld_route::{MarkerKind, StraightLineProvider};
    use eld_sim::NoopObserver;

    use crate::plan::plan;

    #[test]
    fn meridian_trip_end_to_end() {
        let req = meridian_request();
        let plan = plan(&req, &StraightLineProvider::default(), &mut NoopObserver).unwrap();

        assert!(plan.distance_miles > 1300.0 && plan.distance_miles < 1400.0);
        assert_eq!(plan.route_geometry.len(), 3);
        assert!(plan.eld_logs.len() >= 2);
        for day in &plan.eld_logs {
            assert!((day.total_hours() - 24.0).abs() < 1e-6, "{} sums to {}", day.label(), day.total_hours());
        }

        let s = plan.summary;
        assert_eq!(s.days, plan.eld_logs.len());
        assert_eq!(s.current_cycle_used, 6.5);
        assert_eq!(s.fuel_stops, 1);
        assert!(s.rest_stops >= 1);
        assert!((s.driven_miles - plan.distance_miles).abs() < 0.01);
        assert!((s.driving_hours - plan.distance_miles / 60.0).abs() < 0.1);
        assert!((s.working_hours - (s.driving_hours + s.on_duty_hours)).abs() < 0.02);
        let logged = s.working_hours + s.off_duty_hours + s.sleeper_hours;
        assert!((logged - 24.0 * s.days as f64).abs() < 0.05);

        assert_eq!(plan.markers.len(), 3 + plan.stops.len());
        assert_eq!(plan.markers[0].kind, MarkerKind::Start);
        let fuel = plan.stops.iter().position(|st| st.kind == StopKind::Fuel).unwrap();
        assert_eq!(plan.markers[3 + fuel].kind, MarkerKind::Fuel);
    }

    #[test]
    fn same_place_trip_has_no_driving() {
        let mut req = meridian_request();
        req.pickup = req.start.clone();
        req.dropoff = req.start.clone();
        let plan = plan(&req, &StraightLineProvider::default(), &mut NoopObserver).unwrap();

        assert_eq!(plan.summary.days, 1);
        assert_eq!(plan.summary.driving_hours, 0.0);
        assert_eq!(plan.summary.on_duty_hours, 2.0);
        assert!(plan.stops.is_empty());
        assert_eq!(plan.markers.len(), 3);
    }

    #[test]
    fn bad_location_is_reported() {
        let mut req = meridian_request();
        req.pickup = "Reno, NV".to_owned();
        let err = plan(&req, &StraightLineProvider::default(), &mut NoopObserver).unwrap_err();
        assert!(err.to_string().contains("invalid trip location"), "got {err}");
    }

    #[test]
    fn negative_leg_is_rejected() {
        let mut req = meridian_request();
        req.leg_miles = Some([-5.0, 10.0]);
        let err = plan(&req, &StraightLineProvider::default(), &mut NoopObserver).unwrap_err();
        assert!(err.to_string().contains("invalid trip parameters"), "got {err}");
    }

    #[test]
    fn plan_serializes_with_wire_codes() {
        let plan = plan(&meridian_request(), &StraightLineProvider::default(), &mut NoopObserver).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["eld_logs"][0]["entries"][0]["status"], "OFF");
        assert_eq!(json["markers"][0]["kind"], "START");
        assert!(json["stops"].as_array().unwrap().iter().any(|s| s["kind"] == "FUEL"));
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod output_tests {
    use super::*;
    use eld_output::CsvWriter;
    use eld_route::StraightLineProvider;

    use crate::plan_with;

    #[test]
    fn csv_rows_match_plan() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let plan = plan_with(&meridian_request(), &StraightLineProvider::default(), writer).unwrap();

        let entries = plan.eld_logs.iter().map(|d| d.entries.len()).sum::<usize>();
        let mut rdr = csv::Reader::from_path(dir.path().join("duty_log.csv")).unwrap();
        assert_eq!(rdr.records().count(), entries);

        let mut rdr = csv::Reader::from_path(dir.path().join("stops.csv")).unwrap();
        assert_eq!(rdr.records().count(), plan.stops.len());
    }
}
