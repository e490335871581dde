//! Polyline simplification with bounded positional error.

use crate::point::Point;
use crate::trajectory::Trajectory;

/// Reduce `points` to a subsequence whose deviation from the original
/// path never exceeds `tolerance`, in the domain's distance units
/// (Douglas-Peucker).
///
/// The output holds copies of the retained points and always keeps both
/// endpoints. Only positional error counts; properties on discarded
/// points are dropped. Inputs with fewer than three points come back
/// unchanged.
pub fn simplify_points<P: Point>(points: &[P], tolerance: f64) -> Vec<P> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    split_at_peaks(points, 0, points.len() - 1, tolerance, &mut keep);

    let kept = points
        .iter()
        .zip(&keep)
        .filter(|&(_, keep)| *keep)
        .map(|(point, _)| point.clone())
        .collect::<Vec<_>>();

    debug!("simplified {} points down to {}", points.len(), kept.len());
    kept
}

/// Find the point of maximum deviation from the chord between `start`
/// and `end`; if it exceeds the tolerance, keep it and recurse on both
/// halves.
fn split_at_peaks<P: Point>(
    points: &[P],
    start: usize,
    end: usize,
    tolerance: f64,
    keep: &mut [bool],
) {
    if end <= start + 1 {
        return;
    }

    let mut peak = start;
    let mut peak_deviation = 0.;
    for index in (start + 1)..end {
        let deviation = points[index].distance_to_segment(&points[start], &points[end]);
        if deviation > peak_deviation {
            peak_deviation = deviation;
            peak = index;
        }
    }

    if peak_deviation > tolerance {
        keep[peak] = true;
        split_at_peaks(points, start, peak, tolerance, keep);
        split_at_peaks(points, peak, end, tolerance, keep);
    }
}

/// [`simplify_points`] over a whole trajectory, keeping the retained
/// points' timestamps and properties.
pub fn simplify<P>(trajectory: &Trajectory<P>, tolerance: f64) -> Trajectory<P>
where
    P: Point<Base = P>,
{
    Trajectory::from_ordered(simplify_points(trajectory.points(), tolerance))
}
