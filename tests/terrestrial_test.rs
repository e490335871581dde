#[macro_use]
extern crate assert_approx_eq;

extern crate chrono;
extern crate env_logger;
extern crate serde_json;
extern crate trackmath;

use chrono::{DateTime, Utc};

use trackmath::bbox::compute_bounding_box;
use trackmath::haversine::{bearing, haversine_distance};
use trackmath::hull::{convex_hull_area, convex_hull_perimeter};
use trackmath::interpolate::{point_at_time, subset_during_interval};
use trackmath::metrics::{
    distance, end_to_end_distance, interpolate, length, recompute_speed, signed_turn_angle,
    speed_between,
};
use trackmath::simplify::simplify;
use trackmath::{GeoPoint, Point, PropertyValue, Trajectory, TrajectoryPoint};

fn load_track() -> Trajectory<GeoPoint> {
    let raw: serde_json::Value =
        serde_json::from_str(include_str!("fixtures/track.json")).unwrap();

    let points = raw["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            let timestamp = entry["time"]
                .as_str()
                .unwrap()
                .parse::<DateTime<Utc>>()
                .unwrap();
            TrajectoryPoint::new(
                GeoPoint::new(entry["lon"].as_f64().unwrap(), entry["lat"].as_f64().unwrap()),
                timestamp,
            )
            .with_property("altitude", PropertyValue::Real(entry["alt"].as_f64().unwrap()))
        })
        .collect::<Vec<_>>();

    Trajectory::new(points).unwrap()
}

#[test]
fn known_distances() {
    // two fixes over the Rhineland, roughly 75 km apart
    let point1 = GeoPoint::new(6.953333, 51.301389);
    let point2 = GeoPoint::new(6.186389, 50.823194);
    assert_approx_eq!(haversine_distance(&point1, &point2), 75.5, 0.5);

    // one degree of longitude on the equator
    let origin = GeoPoint::new(0., 0.);
    let east = GeoPoint::new(1., 0.);
    assert_approx_eq!(distance(&origin, &east), 111.19, 0.1);

    // bare (lon, lat) tuples work too
    assert_approx_eq!(haversine_distance(&(6.953333, 51.301389), &(6.186389, 50.823194)), 75.5, 0.5);
}

#[test]
fn bearing_cardinal_directions() {
    let origin = GeoPoint::new(0., 0.);

    assert_approx_eq!(bearing(&origin, &GeoPoint::new(0., 1.)), 0.);
    assert_approx_eq!(bearing(&origin, &GeoPoint::new(1., 0.)), 90.);
    assert_approx_eq!(bearing(&origin, &GeoPoint::new(0., -1.)), 180.);
    assert_approx_eq!(bearing(&origin, &GeoPoint::new(-1., 0.)), 270.);
}

#[test]
fn great_circle_interpolation() {
    let south = GeoPoint::new(0., 0.);
    let north = GeoPoint::new(0., 10.);
    let mid = interpolate(&south, &north, 0.5);
    assert_approx_eq!(mid.longitude, 0., 1e-9);
    assert_approx_eq!(mid.latitude, 5., 1e-9);

    // along the equator the midpoint stays on it
    let west = GeoPoint::new(-10., 0.);
    let east = GeoPoint::new(10., 0.);
    let mid = interpolate(&west, &east, 0.5);
    assert_approx_eq!(mid.longitude, 0., 1e-9);
    assert_approx_eq!(mid.latitude, 0., 1e-9);

    let same = interpolate(&south, &south, 0.3);
    assert_approx_eq!(same.latitude, 0., 1e-9);
}

#[test]
fn terrestrial_speeds_are_km_per_hour() {
    let start = "2017-08-14T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let later = "2017-08-14T10:30:00Z".parse::<DateTime<Utc>>().unwrap();

    let p1 = TrajectoryPoint::new(GeoPoint::new(0., 0.), start);
    let p2 = TrajectoryPoint::new(GeoPoint::new(1., 0.), later);

    let km = haversine_distance(&p1.position, &p2.position);
    // half an hour of travel doubles the distance as km/h
    assert_approx_eq!(speed_between(&p1, &p2).unwrap(), km * 2., 1e-6);
}

#[test]
fn terrestrial_turns_are_signed_degrees() {
    let a = GeoPoint::new(0., 0.);
    let b = GeoPoint::new(1., 0.);
    let south = GeoPoint::new(1., -1.);

    // heading east then turning south is a clockwise (positive) turn
    let turn = signed_turn_angle(&a, &b, &south);
    assert!(turn > 80. && turn < 100.);
}

#[test]
fn fixture_track_measures() {
    let _ = env_logger::try_init();
    let track = load_track();

    let total = length(track.points());
    let direct = end_to_end_distance(track.points());
    assert!(total > direct);
    assert!(direct > 13. && direct < 15.);

    let bbox = compute_bounding_box(track.points()).unwrap();
    for point in track.points() {
        assert!(bbox.contains(&point.position));
    }
    assert_approx_eq!(bbox.min_corner.longitude, 6.9);
    assert_approx_eq!(bbox.max_corner.longitude, 7.1);
}

#[test]
fn fixture_track_speeds() {
    let mut track = load_track();
    recompute_speed(&mut track, "speed").unwrap();

    let speeds = track
        .points()
        .iter()
        .map(|point| point.properties["speed"].as_real().unwrap())
        .collect::<Vec<_>>();

    assert_approx_eq!(speeds[0], speeds[1]);
    for speed in &speeds {
        // every leg is flown at double-digit km/h
        assert!(*speed > 10. && *speed < 100.);
    }

    // the altitude annotations survive the rewrite
    assert_approx_eq!(trackmath::altitude(&track.points()[0]), 1200.);
}

#[test]
fn fixture_track_time_sampling() {
    let track = load_track();

    let before = point_at_time(&track, "2017-08-14T10:00:00Z".parse().unwrap()).unwrap();
    assert_approx_eq!(before.position.longitude, 6.9);

    let mid = point_at_time(&track, "2017-08-14T10:28:35Z".parse().unwrap()).unwrap();
    assert!(mid.position.longitude > 6.9 && mid.position.longitude < 6.91);
    // interpolated altitude halfway into the first minute
    assert_approx_eq!(mid.properties["altitude"].as_real().unwrap(), 1215.);

    let subset = subset_during_interval(
        &track,
        "2017-08-14T10:30:05Z".parse().unwrap(),
        "2017-08-14T10:35:05Z".parse().unwrap(),
    );
    assert_eq!(subset.points().len(), 6);
    assert_eq!(subset.start_time().unwrap(), "2017-08-14T10:30:05Z".parse::<DateTime<Utc>>().unwrap());
    assert_eq!(subset.end_time().unwrap(), "2017-08-14T10:35:05Z".parse::<DateTime<Utc>>().unwrap());
}

#[test]
fn fixture_track_simplification() {
    let track = load_track();

    let tolerance = 0.05; // kilometers
    let kept = simplify(&track, tolerance);
    assert!(kept.points().len() < track.points().len());
    assert!(kept.points().len() >= 2);

    for point in track.points() {
        let deviation = kept
            .points()
            .windows(2)
            .map(|pair| point.position.distance_to_segment(&pair[0].position, &pair[1].position))
            .fold(f64::MAX, f64::min);
        assert!(deviation <= tolerance + 1e-6);
    }
}

#[test]
fn fixture_track_hull() {
    let track = load_track();

    let perimeter = convex_hull_perimeter(track.points()).unwrap();
    let area = convex_hull_area(track.points()).unwrap();

    // the track is ~14 km wide and under a kilometer tall
    assert!(perimeter > 27. && perimeter < 33.);
    assert!(area > 2. && area < 16.);
}
