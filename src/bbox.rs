//! Axis-aligned bounding boxes.

use failure::Error;

use crate::error::GeomError;
use crate::point::Point;

/// Axis-aligned box spanning `min_corner` to `max_corner`.
///
/// Invariant: `min_corner.coord(i) <= max_corner.coord(i)` on every
/// axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox<P: Point> {
    pub min_corner: P,
    pub max_corner: P,
}

impl<P: Point> BoundingBox<P> {
    /// Build a box, rejecting corners that are swapped on any axis.
    pub fn new(min_corner: P, max_corner: P) -> Result<BoundingBox<P>, Error> {
        for axis in 0..P::DIM {
            if min_corner.coord(axis) > max_corner.coord(axis) {
                return Err(GeomError::SwappedCorners { axis }.into());
            }
        }

        Ok(BoundingBox {
            min_corner,
            max_corner,
        })
    }

    pub fn contains(&self, point: &P) -> bool {
        (0..P::DIM).all(|axis| {
            let c = point.coord(axis);
            self.min_corner.coord(axis) <= c && c <= self.max_corner.coord(axis)
        })
    }

    /// Overlap test; boxes touching only on an edge still intersect.
    pub fn intersects(&self, other: &BoundingBox<P>) -> bool {
        (0..P::DIM).all(|axis| {
            self.min_corner.coord(axis) <= other.max_corner.coord(axis)
                && other.min_corner.coord(axis) <= self.max_corner.coord(axis)
        })
    }
}

/// Smallest axis-aligned box containing every point of the sequence.
///
/// Single pass; the corners take their domain and dimensionality from
/// the point type. An empty sequence has no bounding box: the failure
/// is logged and `None` returned.
pub fn compute_bounding_box<P: Point>(points: &[P]) -> Option<BoundingBox<P::Base>> {
    let first = match points.first() {
        Some(first) => first,
        None => {
            error!("cannot compute a bounding box without points");
            return None;
        }
    };

    let mut lows = (0..P::DIM).map(|axis| first.coord(axis)).collect::<Vec<_>>();
    let mut highs = lows.clone();

    for point in &points[1..] {
        for axis in 0..P::DIM {
            let c = point.coord(axis);
            if c < lows[axis] {
                lows[axis] = c;
            }
            if c > highs[axis] {
                highs[axis] = c;
            }
        }
    }

    Some(BoundingBox {
        min_corner: P::Base::from_coords(&lows),
        max_corner: P::Base::from_coords(&highs),
    })
}
