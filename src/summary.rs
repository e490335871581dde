//! Central-tendency summaries over point sets.

use crate::parallel::*;
use crate::point::Point;

const MEDIAN_MAX_ITERATIONS: usize = 100;
const MEDIAN_EPSILON: f64 = 1e-10;

/// Componentwise average of the input coordinates. `None` for an empty
/// set.
///
/// Terrestrial coordinates are averaged in plain degrees; point sets
/// spanning the antimeridian will average to a misleading longitude.
pub fn geometric_mean<P: Point>(points: &[P]) -> Option<P::Base> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let coords = (0..P::DIM)
        .map(|axis| opt_par_iter(points).map(|point| point.coord(axis)).sum::<f64>() / count)
        .collect::<Vec<_>>();

    Some(P::Base::from_coords(&coords))
}

/// L1 multivariate median of the input points. `None` for an empty set.
///
/// Computed by Weiszfeld iteration in coordinate space with domain
/// distances as weights, starting from the componentwise mean. Inputs
/// closer than the convergence epsilon to the current estimate
/// contribute no weight for that round.
pub fn geometric_median<P: Point>(points: &[P]) -> Option<P::Base> {
    let mut current = geometric_mean(points)?;

    for _ in 0..MEDIAN_MAX_ITERATIONS {
        let weights = opt_par_iter(points)
            .map(|point| {
                let d = point.base().distance_to(&current);
                if d < MEDIAN_EPSILON {
                    0.
                } else {
                    1. / d
                }
            })
            .collect::<Vec<_>>();

        let total = weights.iter().sum::<f64>();
        if total == 0. {
            // every input coincides with the current estimate
            break;
        }

        let coords = (0..P::DIM)
            .map(|axis| {
                points
                    .iter()
                    .zip(&weights)
                    .map(|(point, weight)| point.coord(axis) * weight)
                    .sum::<f64>()
                    / total
            })
            .collect::<Vec<_>>();
        let next = P::Base::from_coords(&coords);

        let shift = current.distance_to(&next);
        current = next;
        if shift < MEDIAN_EPSILON {
            break;
        }
    }

    Some(current)
}
