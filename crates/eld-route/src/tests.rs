//! Tests for eld-route.

use eld_core::GeoPoint;

/// Points due north of each other on the 90° W meridian.
fn meridian(lats: &[f64]) -> Vec<GeoPoint> {
    lats.iter().map(|&lat| GeoPoint::new(lat, -90.0)).collect()
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry_tests {
    use super::*;
    use crate::{RouteError, RouteGeometry};

    #[test]
    fn empty_geometry_errors() {
        let g = RouteGeometry::default();
        assert!(g.is_empty());
        assert!(matches!(g.point_at_distance(10.0), Err(RouteError::EmptyGeometry)));
        assert_eq!(g.length_miles(), 0.0);
    }

    #[test]
    fn single_point_always_returned() {
        let p = GeoPoint::new(34.0, -118.0);
        let g = RouteGeometry::new(vec![p]);
        assert_eq!(g.point_at_distance(0.0).unwrap(), p);
        assert_eq!(g.point_at_distance(500.0).unwrap(), p);
    }

    #[test]
    fn length_is_sum_of_segments() {
        let pts = meridian(&[30.0, 31.0, 33.0]);
        let g = RouteGeometry::from(pts.clone());
        let expected = pts[0].distance_miles(pts[1]) + pts[1].distance_miles(pts[2]);
        assert!((g.length_miles() - expected).abs() < 1e-9);
    }

    #[test]
    fn interpolates_inside_segment() {
        let g = RouteGeometry::new(meridian(&[30.0, 31.0, 33.0]));
        let first_segment = g.points[0].distance_miles(g.points[1]);

        let mid = g.point_at_distance(first_segment / 2.0).unwrap();
        assert!((mid.lat - 30.5).abs() < 1e-9, "got {mid}");
        assert_eq!(mid.lon, -90.0);

        // Halfway through the second (two-degree) segment.
        let later = g.point_at_distance(first_segment * 2.0).unwrap();
        assert!((later.lat - 32.0).abs() < 1e-6, "got {later}");
    }

    #[test]
    fn clamps_to_ends() {
        let g = RouteGeometry::new(meridian(&[30.0, 31.0]));
        assert_eq!(g.point_at_distance(-5.0).unwrap(), g.points[0]);
        assert_eq!(g.point_at_distance(10_000.0).unwrap(), g.points[1]);
    }

    #[test]
    fn nan_distance_rejected() {
        let g = RouteGeometry::new(meridian(&[30.0, 31.0]));
        assert!(matches!(
            g.point_at_distance(f64::NAN),
            Err(RouteError::InvalidDistance(_))
        ));
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider_tests {
    use super::*;
    use crate::{RouteError, RouteProvider, StraightLineProvider, TripStops};

    #[test]
    fn straight_line_route_uses_haversine_legs() {
        let pts = meridian(&[30.0, 31.0, 32.0]);
        let stops = TripStops::new(pts[0], pts[1], pts[2]);
        let route = StraightLineProvider::default().route(&stops).unwrap();

        let d1 = pts[0].distance_miles(pts[1]);
        let d2 = pts[1].distance_miles(pts[2]);
        assert!((route.leg_miles[0] - d1).abs() < 1e-9);
        assert!((route.leg_miles[1] - d2).abs() < 1e-9);
        assert!((route.distance_miles - (d1 + d2)).abs() <= 0.005);
        assert!((route.duration_hours - (d1 + d2) / 60.0).abs() <= 0.005);
        assert_eq!(route.geometry.points, pts);
        assert_eq!(route.stops, stops);
        assert_eq!(route.legs().total(), d1 + d2);
    }

    #[test]
    fn parses_coordinate_literals() {
        let stops = TripStops::parse("34.05,-118.24", "36.17,-115.14", "33.45,-112.07").unwrap();
        assert_eq!(stops.pickup, GeoPoint::new(36.17, -115.14));
    }

    #[test]
    fn free_text_location_rejected() {
        let result = TripStops::parse("Los Angeles", "36.17,-115.14", "33.45,-112.07");
        assert!(matches!(result, Err(RouteError::Location(_))));
    }
}

// ── Markers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod marker_tests {
    use super::*;
    use eld_core::{HosRules, StopEvent, StopKind};
    use eld_sim::plan_trip;

    use crate::{MarkerKind, RouteProvider, StraightLineProvider, TripStops, build_markers};

    #[test]
    fn trip_points_come_first() {
        let pts = meridian(&[30.0, 31.0, 32.0]);
        let route = StraightLineProvider::default()
            .route(&TripStops::new(pts[0], pts[1], pts[2]))
            .unwrap();
        let markers = build_markers(&route, &[]).unwrap();

        let kinds: Vec<MarkerKind> = markers.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, [MarkerKind::Start, MarkerKind::Pickup, MarkerKind::Dropoff]);
        assert_eq!(markers[1].point, pts[1]);
        assert!(markers.iter().all(|m| m.distance_miles.is_none()));
    }

    #[test]
    fn stop_markers_follow_stop_order() {
        let pts = meridian(&[30.0, 31.0, 32.0]);
        let route = StraightLineProvider::default()
            .route(&TripStops::new(pts[0], pts[1], pts[2]))
            .unwrap();
        let stops = [
            StopEvent { kind: StopKind::Rest, cumulative_distance: 10.0 },
            StopEvent { kind: StopKind::Fuel, cumulative_distance: 100.0 },
        ];
        let markers = build_markers(&route, &stops).unwrap();

        assert_eq!(markers.len(), 5);
        assert_eq!(markers[3].kind, MarkerKind::Rest);
        assert_eq!(markers[3].distance_miles, Some(10.0));
        assert_eq!(markers[4].kind, MarkerKind::Fuel);
        assert!(markers[4].point.lat > markers[3].point.lat);
        assert_eq!(MarkerKind::Fuel.to_string(), "Fuel");
    }

    #[test]
    fn simulated_stops_land_on_the_route() {
        let pts = meridian(&[25.0, 35.0, 45.0]);
        let route = StraightLineProvider::default()
            .route(&TripStops::new(pts[0], pts[1], pts[2]))
            .unwrap();
        let log = plan_trip(route.legs(), &HosRules::default()).unwrap();
        assert_eq!(log.stops_of(StopKind::Fuel).count(), 1);
        assert!(log.stops_of(StopKind::Rest).count() >= 1);

        let markers = build_markers(&route, &log.stops).unwrap();
        assert_eq!(markers.len(), 3 + log.stops.len());

        // Along a meridian latitude grows linearly with distance.
        let length = route.geometry.length_miles();
        for (marker, stop) in markers[3..].iter().zip(&log.stops) {
            let expected_lat = 25.0 + 20.0 * stop.cumulative_distance / length;
            assert!((marker.point.lat - expected_lat).abs() < 1e-6);
            assert_eq!(marker.point.lon, -90.0);
            assert_eq!(marker.kind, MarkerKind::from(stop.kind));
        }
    }
}
