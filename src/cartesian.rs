//! Flat 2d and 3d domains: native units, Euclidean measures, headings
//! and turn angles in radians, speeds in units per second.

use std::f64::consts::PI;

use crate::point::{Azimuth, Coordinates, Point, TurnAngle};

/// A point in the flat 2d domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64) -> CartesianPoint {
        CartesianPoint { x, y }
    }
}

impl Coordinates for CartesianPoint {
    const DIM: usize = 2;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {} out of range for a 2d point", axis),
        }
    }
}

impl Point for CartesianPoint {
    type Base = CartesianPoint;

    const TIME_UNIT_SECONDS: f64 = 1.;

    fn from_coords(coords: &[f64]) -> CartesianPoint {
        CartesianPoint::new(coords[0], coords[1])
    }

    fn base(&self) -> CartesianPoint {
        *self
    }

    fn distance_to(&self, other: &CartesianPoint) -> f64 {
        euclidean_distance(self, other)
    }

    fn interpolate(&self, other: &CartesianPoint, fraction: f64) -> CartesianPoint {
        lerp(self, other, fraction)
    }

    fn distance_to_segment(&self, start: &CartesianPoint, end: &CartesianPoint) -> f64 {
        segment_distance(self, start, end)
    }
}

impl Azimuth for CartesianPoint {
    const FULL_TURN: f64 = 2. * PI;

    fn bearing_to(&self, other: &CartesianPoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl TurnAngle for CartesianPoint {
    fn turn_angle(a: &CartesianPoint, b: &CartesianPoint, c: &CartesianPoint) -> f64 {
        vector_turn_angle(a, b, c)
    }
}

/// A point in the flat 3d domain. Bearings and signed turn angles are
/// not defined here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint3 {
    pub fn new(x: f64, y: f64, z: f64) -> CartesianPoint3 {
        CartesianPoint3 { x, y, z }
    }
}

impl Coordinates for CartesianPoint3 {
    const DIM: usize = 3;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {} out of range for a 3d point", axis),
        }
    }
}

impl Point for CartesianPoint3 {
    type Base = CartesianPoint3;

    const TIME_UNIT_SECONDS: f64 = 1.;

    fn from_coords(coords: &[f64]) -> CartesianPoint3 {
        CartesianPoint3::new(coords[0], coords[1], coords[2])
    }

    fn base(&self) -> CartesianPoint3 {
        *self
    }

    fn distance_to(&self, other: &CartesianPoint3) -> f64 {
        euclidean_distance(self, other)
    }

    fn interpolate(&self, other: &CartesianPoint3, fraction: f64) -> CartesianPoint3 {
        lerp(self, other, fraction)
    }

    fn distance_to_segment(&self, start: &CartesianPoint3, end: &CartesianPoint3) -> f64 {
        segment_distance(self, start, end)
    }
}

impl TurnAngle for CartesianPoint3 {
    fn turn_angle(a: &CartesianPoint3, b: &CartesianPoint3, c: &CartesianPoint3) -> f64 {
        vector_turn_angle(a, b, c)
    }
}

fn euclidean_distance<C: Coordinates>(a: &C, b: &C) -> f64 {
    let mut sum = 0.;
    for axis in 0..C::DIM {
        let d = b.coord(axis) - a.coord(axis);
        sum += d * d;
    }
    sum.sqrt()
}

fn lerp<P: Point>(a: &P, b: &P, fraction: f64) -> P {
    let coords = (0..P::DIM)
        .map(|axis| a.coord(axis) + (b.coord(axis) - a.coord(axis)) * fraction)
        .collect::<Vec<_>>();
    P::from_coords(&coords)
}

/// Distance from `point` to the segment `start`..`end`, clamped to the
/// segment's extent.
fn segment_distance<C: Coordinates>(point: &C, start: &C, end: &C) -> f64 {
    let mut length_sq = 0.;
    let mut dot = 0.;
    for axis in 0..C::DIM {
        let seg = end.coord(axis) - start.coord(axis);
        length_sq += seg * seg;
        dot += seg * (point.coord(axis) - start.coord(axis));
    }

    if length_sq == 0. {
        return euclidean_distance(point, start);
    }

    let t = (dot / length_sq).max(0.).min(1.);
    let mut sum = 0.;
    for axis in 0..C::DIM {
        let closest = start.coord(axis) + t * (end.coord(axis) - start.coord(axis));
        let d = point.coord(axis) - closest;
        sum += d * d;
    }
    sum.sqrt()
}

/// Angle in radians between the segments a→b and b→c, in [0, π].
fn vector_turn_angle<C: Coordinates>(a: &C, b: &C, c: &C) -> f64 {
    let mut dot = 0.;
    let mut len1_sq = 0.;
    let mut len2_sq = 0.;
    for axis in 0..C::DIM {
        let u = b.coord(axis) - a.coord(axis);
        let v = c.coord(axis) - b.coord(axis);
        dot += u * v;
        len1_sq += u * u;
        len2_sq += v * v;
    }

    if len1_sq == 0. || len2_sq == 0. {
        return 0.;
    }

    (dot / (len1_sq.sqrt() * len2_sq.sqrt())).max(-1.).min(1.).acos()
}
