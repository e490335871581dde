//! Convex hull measures over point sets.
//!
//! Terrestrial points are projected onto a local flat plane first, so
//! all hull math happens in a plane with the domain's distance units.

use std::cmp::Ordering;

use crate::cartesian::CartesianPoint;
use crate::flat::to_flat_points;
use crate::point::Point;
use crate::terrestrial::GeoPoint;
use crate::trajectory::TrajectoryPoint;

/// Projection of a point set onto one shared plane, in the domain's
/// distance units. Not available for the 3d domain.
pub trait Flatten: Point {
    fn flatten(points: &[Self]) -> Vec<(f64, f64)>;
}

impl Flatten for CartesianPoint {
    fn flatten(points: &[CartesianPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|point| (point.x, point.y)).collect()
    }
}

impl Flatten for GeoPoint {
    fn flatten(points: &[GeoPoint]) -> Vec<(f64, f64)> {
        to_flat_points(points)
            .iter()
            .map(|point| (point.x, point.y))
            .collect()
    }
}

impl<P: Flatten + Point<Base = P>> Flatten for TrajectoryPoint<P> {
    fn flatten(points: &[TrajectoryPoint<P>]) -> Vec<(f64, f64)> {
        let positions = points.iter().map(|point| point.position.clone()).collect::<Vec<_>>();
        P::flatten(&positions)
    }
}

/// Length of the convex hull's closed boundary, in domain distance
/// units. `None` for an empty set.
pub fn convex_hull_perimeter<P: Flatten>(points: &[P]) -> Option<f64> {
    let hull = hull_of(points)?;

    let mut perimeter = 0.;
    for (index, &vertex) in hull.iter().enumerate() {
        let next = hull[(index + 1) % hull.len()];
        perimeter += planar_distance(vertex, next);
    }

    Some(perimeter)
}

/// Area of the convex hull in squared domain units. `None` for an empty
/// set; degenerate hulls have area 0.
pub fn convex_hull_area<P: Flatten>(points: &[P]) -> Option<f64> {
    let hull = hull_of(points)?;

    let mut doubled = 0.;
    for (index, &vertex) in hull.iter().enumerate() {
        let next = hull[(index + 1) % hull.len()];
        doubled += vertex.0 * next.1 - next.0 * vertex.1;
    }

    Some(doubled.abs() / 2.)
}

/// Ratio of the hull's shortest axis over its longest, in [0, 1].
///
/// Measured on the minimum-area bounding rectangle of the hull
/// vertices; degenerate hulls (single point, collinear set) have
/// ratio 0. `None` for an empty set.
pub fn convex_hull_aspect_ratio<P: Flatten>(points: &[P]) -> Option<f64> {
    let hull = hull_of(points)?;

    let mut best: Option<(f64, f64, f64)> = None; // (area, short, long)
    for (index, &vertex) in hull.iter().enumerate() {
        let next = hull[(index + 1) % hull.len()];
        let edge = (next.0 - vertex.0, next.1 - vertex.1);
        let edge_len = (edge.0 * edge.0 + edge.1 * edge.1).sqrt();
        if edge_len == 0. {
            continue;
        }
        let dir = (edge.0 / edge_len, edge.1 / edge_len);
        let normal = (-dir.1, dir.0);

        let mut along_min = f64::MAX;
        let mut along_max = f64::MIN;
        let mut across_min = f64::MAX;
        let mut across_max = f64::MIN;
        for &point in &hull {
            let along = point.0 * dir.0 + point.1 * dir.1;
            let across = point.0 * normal.0 + point.1 * normal.1;
            along_min = along_min.min(along);
            along_max = along_max.max(along);
            across_min = across_min.min(across);
            across_max = across_max.max(across);
        }

        let width = along_max - along_min;
        let height = across_max - across_min;
        let area = width * height;
        let better = match best {
            Some((best_area, _, _)) => area < best_area,
            None => true,
        };
        if better {
            best = Some((area, width.min(height), width.max(height)));
        }
    }

    match best {
        Some((_, short, long)) if long > 0. => Some(short / long),
        _ => Some(0.),
    }
}

/// Hull vertices in counterclockwise order (Andrew's monotone chain).
/// Degenerate inputs give hulls of one or two vertices.
fn hull_of<P: Flatten>(points: &[P]) -> Option<Vec<(f64, f64)>> {
    if points.is_empty() {
        return None;
    }

    let mut flat = P::flatten(points);
    flat.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    flat.dedup();

    if flat.len() < 3 {
        return Some(flat);
    }

    let mut lower: Vec<(f64, f64)> = Vec::new();
    for &point in &flat {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], point) <= 0. {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<(f64, f64)> = Vec::new();
    for &point in flat.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], point) <= 0. {
            upper.pop();
        }
        upper.push(point);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    Some(lower)
}

fn cross(origin: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - origin.0) * (b.1 - origin.1) - (a.1 - origin.1) * (b.0 - origin.0)
}

fn planar_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
