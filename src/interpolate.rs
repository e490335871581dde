//! Sampling trajectories by travel distance and by time.

use crate::metrics::length;
use crate::point::Point;
use crate::trajectory::{Timestamp, Trajectory, TrajectoryPoint};

/// Point at `fraction` of the trajectory's total travel distance.
///
/// Fractions at or before 0 return the first point, at or past 1 the
/// last. `None` when the trajectory is empty.
pub fn point_at_fraction<P>(trajectory: &Trajectory<P>, fraction: f64) -> Option<TrajectoryPoint<P>>
where
    P: Point<Base = P>,
{
    let points = trajectory.points();
    let first = points.first()?;

    if fraction <= 0. {
        return Some(first.clone());
    }
    if fraction >= 1. {
        return points.last().cloned();
    }

    let total = length(points);
    if total == 0. {
        return Some(first.clone());
    }

    let target = total * fraction;
    let mut travelled = 0.;
    for pair in points.windows(2) {
        let segment = pair[0].distance_to(&pair[1]);
        if segment > 0. && travelled + segment >= target {
            let local = (target - travelled) / segment;
            return Some(pair[0].interpolate(&pair[1], local));
        }
        travelled += segment;
    }

    points.last().cloned()
}

/// Point on the trajectory at time `when`.
///
/// Times before the first or after the last point clamp to the
/// endpoints; anything in between interpolates within the containing
/// segment. `None` when the trajectory is empty.
pub fn point_at_time<P>(trajectory: &Trajectory<P>, when: Timestamp) -> Option<TrajectoryPoint<P>>
where
    P: Point<Base = P>,
{
    let points = trajectory.points();
    let first = points.first()?;
    let last = points.last()?;

    if when <= first.timestamp {
        return Some(first.clone());
    }
    if when >= last.timestamp {
        return Some(last.clone());
    }

    // first vertex at or past `when`; in range because of the clamps
    let upper = points.partition_point(|point| point.timestamp < when);
    let before = &points[upper - 1];
    let after = &points[upper];

    if after.timestamp == when {
        return Some(after.clone());
    }

    let span = after
        .timestamp
        .signed_duration_since(before.timestamp)
        .num_milliseconds();
    if span == 0 {
        return Some(before.clone());
    }

    let local = when
        .signed_duration_since(before.timestamp)
        .num_milliseconds() as f64
        / span as f64;
    Some(before.interpolate(after, local))
}

/// The part of the trajectory between `start` and `end`.
///
/// The result carries interpolated boundary points plus every original
/// point strictly inside the clamped interval, and is idempotent for a
/// fixed interval. An interval that misses the trajectory's time span
/// entirely, or has `start > end`, yields an empty trajectory.
pub fn subset_during_interval<P>(
    trajectory: &Trajectory<P>,
    start: Timestamp,
    end: Timestamp,
) -> Trajectory<P>
where
    P: Point<Base = P>,
{
    let points = trajectory.points();
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Trajectory::empty(),
    };

    if start > end || end < first.timestamp || start > last.timestamp {
        return Trajectory::empty();
    }

    let window_start = start.max(first.timestamp);
    let window_end = end.min(last.timestamp);

    if window_start == window_end {
        let boundary = point_at_time(trajectory, window_start);
        return Trajectory::from_ordered(boundary.into_iter().collect());
    }

    let mut result = Vec::new();
    if let Some(head) = point_at_time(trajectory, window_start) {
        result.push(head);
    }
    for point in points {
        if point.timestamp > window_start && point.timestamp < window_end {
            result.push(point.clone());
        }
    }
    if let Some(tail) = point_at_time(trajectory, window_end) {
        result.push(tail);
    }

    debug!("interval subset kept {} of {} points", result.len(), points.len());
    Trajectory::from_ordered(result)
}
