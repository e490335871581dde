//! Point capabilities shared by all trajectory algorithms.

use crate::property::PropertyValue;

/// Positional access to the coordinates of a point-like value.
///
/// Implemented by the domain point types as well as by bare coordinate
/// tuples and arrays, so algorithms that only read coordinates accept
/// either representation.
pub trait Coordinates {
    /// Number of coordinate axes.
    const DIM: usize;

    /// Coordinate on the given axis.
    ///
    /// Panics when `axis >= Self::DIM`.
    fn coord(&self, axis: usize) -> f64;
}

/// A point in one concrete coordinate domain.
///
/// The implementing type fixes the distance, interpolation and
/// deviation formulas, so points from different domains cannot meet in
/// one call.
pub trait Point: Coordinates + Clone + Sync {
    /// The plain position type carrying no annotations. For a bare
    /// domain point this is the point type itself.
    type Base: Point<Base = Self::Base>;

    /// Seconds per time unit of the domain's speed measure: 3600 for
    /// terrestrial km/h, 1 for Cartesian units per second.
    const TIME_UNIT_SECONDS: f64;

    /// Build a point from one coordinate per axis.
    ///
    /// `coords` must hold at least `Self::DIM` values.
    fn from_coords(coords: &[f64]) -> Self;

    /// The position stripped of any annotations.
    fn base(&self) -> Self::Base;

    /// Distance to `other` in the domain's native units.
    fn distance_to(&self, other: &Self) -> f64;

    /// Point at `fraction` of the way towards `other`, along a great
    /// circle for terrestrial points and a straight line otherwise.
    fn interpolate(&self, other: &Self, fraction: f64) -> Self;

    /// Deviation of `self` from the segment between `start` and `end`,
    /// in the domain's native units.
    fn distance_to_segment(&self, start: &Self, end: &Self) -> f64;

    /// Named property lookup. Base points carry no properties.
    fn property(&self, _name: &str) -> Option<&PropertyValue> {
        None
    }
}

/// Directional measure for domains with a well-defined heading.
pub trait Azimuth: Point {
    /// Angular units in a full turn: 360 for degrees, 2π for radians.
    const FULL_TURN: f64;

    /// Heading from `self` towards `other`. Terrestrial bearings are in
    /// degrees, 0 due north and 90 due east; Cartesian headings are in
    /// radians, 0 along +X and π/2 along +Y.
    fn bearing_to(&self, other: &Self) -> f64;
}

/// Magnitude of the direction change at the middle point of a corner.
pub trait TurnAngle: Point {
    /// Angle between the segments a→b and b→c, in the domain's angular
    /// units.
    fn turn_angle(a: &Self, b: &Self, c: &Self) -> f64;
}

/// X-coordinate of anything with positional access.
pub fn x<C: Coordinates>(point: &C) -> f64 {
    point.coord(0)
}

/// Y-coordinate of anything with positional access.
pub fn y<C: Coordinates>(point: &C) -> f64 {
    point.coord(1)
}

/// Longitude in degrees, read from the first coordinate. Also accepts
/// plain `(lon, lat)` tuples.
pub fn longitude<C: Coordinates>(point: &C) -> f64 {
    point.coord(0)
}

/// Latitude in degrees, read from the second coordinate. Also accepts
/// plain `(lon, lat)` tuples.
pub fn latitude<C: Coordinates>(point: &C) -> f64 {
    point.coord(1)
}

/// Altitude of a point.
///
/// Checks the `altitude` property first, then falls back to the third
/// coordinate for 3d domains, and finally to 0.
pub fn altitude<P: Point>(point: &P) -> f64 {
    if let Some(value) = point.property("altitude").and_then(PropertyValue::as_real) {
        return value;
    }
    if P::DIM >= 3 {
        point.coord(2)
    } else {
        0.
    }
}

impl Coordinates for (f64, f64) {
    const DIM: usize = 2;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.0,
            1 => self.1,
            _ => panic!("axis {} out of range for a 2d point", axis),
        }
    }
}

impl Coordinates for (f64, f64, f64) {
    const DIM: usize = 3;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("axis {} out of range for a 3d point", axis),
        }
    }
}

impl Coordinates for [f64; 2] {
    const DIM: usize = 2;

    fn coord(&self, axis: usize) -> f64 {
        self[axis]
    }
}

impl Coordinates for [f64; 3] {
    const DIM: usize = 3;

    fn coord(&self, axis: usize) -> f64 {
        self[axis]
    }
}
