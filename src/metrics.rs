//! Scalar measures over points and trajectories.

use failure::Error;

use crate::error::GeomError;
use crate::point::{Azimuth, Point, TurnAngle};
use crate::property::PropertyValue;
use crate::trajectory::{Trajectory, TrajectoryPoint};

/// Distance between two points in the domain's native units.
pub fn distance<P: Point>(hither: &P, yon: &P) -> f64 {
    hither.distance_to(yon)
}

/// Point at `fraction` of the way from `start` to `end`, along a great
/// circle for terrestrial points and a straight line otherwise.
pub fn interpolate<P: Point>(start: &P, end: &P, fraction: f64) -> P {
    start.interpolate(end, fraction)
}

/// Speed between two timestamped points in the domain's speed units:
/// km/h for terrestrial points, units per second for Cartesian points.
///
/// A pair with equal or reversed timestamps has no defined speed and is
/// reported as an error.
pub fn speed_between<P>(
    point1: &TrajectoryPoint<P>,
    point2: &TrajectoryPoint<P>,
) -> Result<f64, Error>
where
    P: Point<Base = P>,
{
    let millis = point2
        .timestamp
        .signed_duration_since(point1.timestamp)
        .num_milliseconds();

    if millis < 0 {
        return Err(GeomError::ReversedTimestamps {
            first: point1.timestamp,
            second: point2.timestamp,
        }
        .into());
    }
    if millis == 0 {
        return Err(GeomError::ZeroElapsedTime(point1.timestamp).into());
    }

    let elapsed = millis as f64 / 1000. / P::TIME_UNIT_SECONDS;
    Ok(point1.distance_to(point2) / elapsed)
}

/// Recompute per-point speeds from positions and timestamps, storing
/// them in the named property on every point.
///
/// The value at point N is the speed over the segment from point N-1;
/// point 0 copies the value computed for point 1. A single-point
/// trajectory gets speed 0 and an empty one is left untouched. This is
/// the kernel's only mutating operation; a timestamp error aborts it
/// before any point is written.
pub fn recompute_speed<P>(trajectory: &mut Trajectory<P>, target_property: &str) -> Result<(), Error>
where
    P: Point<Base = P>,
{
    match trajectory.len() {
        0 => Ok(()),
        1 => {
            trajectory.points_mut()[0].set_property(target_property, PropertyValue::Real(0.));
            Ok(())
        }
        _ => {
            let mut speeds = Vec::with_capacity(trajectory.len() - 1);
            for pair in trajectory.points().windows(2) {
                speeds.push(speed_between(&pair[0], &pair[1])?);
            }

            let points = trajectory.points_mut();
            for (index, speed) in speeds.iter().enumerate() {
                points[index + 1].set_property(target_property, PropertyValue::Real(*speed));
            }
            points[0].set_property(target_property, PropertyValue::Real(speeds[0]));

            Ok(())
        }
    }
}

/// Total arc length of the path, summing consecutive point distances.
/// Paths with fewer than two points have length 0.
pub fn length<P: Point>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Distance between the path's endpoints, ignoring everything in
/// between. Paths with fewer than two points have distance 0.
pub fn end_to_end_distance<P: Point>(points: &[P]) -> f64 {
    if points.len() < 2 {
        return 0.;
    }

    points[0].distance_to(&points[points.len() - 1])
}

/// Signed turn at `b` when travelling a → b → c.
///
/// Terrestrial turns are in degrees with positive angles clockwise;
/// Cartesian turns are in radians with positive angles
/// counterclockwise.
pub fn signed_turn_angle<P: Azimuth>(a: &P, b: &P, c: &P) -> f64 {
    let half_turn = P::FULL_TURN / 2.;
    let mut turn = b.bearing_to(c) - a.bearing_to(b);

    while turn > half_turn {
        turn -= P::FULL_TURN;
    }
    while turn <= -half_turn {
        turn += P::FULL_TURN;
    }

    turn
}

/// Magnitude of the turn at `b`, without the direction: degrees for
/// terrestrial points, radians for Cartesian points.
pub fn unsigned_turn_angle<P: TurnAngle>(a: &P, b: &P, c: &P) -> f64 {
    P::turn_angle(a, b, c)
}

/// Predicate for filtering out point pairs that jump farther than
/// `max_distance`.
pub fn sanity_check_distance_less_than<P: Point>(max_distance: f64) -> impl Fn(&P, &P) -> bool {
    move |point1, point2| point1.distance_to(point2) < max_distance
}
