//! The terrestrial domain: longitude/latitude in degrees, distances in
//! kilometers, speeds in km/h.

use crate::haversine;
use crate::point::{Azimuth, Coordinates, Point, TurnAngle};

/// A geographic point. Longitude and latitude are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> GeoPoint {
        GeoPoint { longitude, latitude }
    }
}

impl Coordinates for GeoPoint {
    const DIM: usize = 2;

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.longitude,
            1 => self.latitude,
            _ => panic!("axis {} out of range for a geographic point", axis),
        }
    }
}

impl Point for GeoPoint {
    type Base = GeoPoint;

    const TIME_UNIT_SECONDS: f64 = 3600.;

    fn from_coords(coords: &[f64]) -> GeoPoint {
        GeoPoint::new(coords[0], coords[1])
    }

    fn base(&self) -> GeoPoint {
        *self
    }

    fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine::haversine_distance(self, other)
    }

    fn interpolate(&self, other: &GeoPoint, fraction: f64) -> GeoPoint {
        let (longitude, latitude) = haversine::interpolate_coords(self, other, fraction);
        GeoPoint::new(longitude, latitude)
    }

    fn distance_to_segment(&self, start: &GeoPoint, end: &GeoPoint) -> f64 {
        haversine::cross_track_distance(self, start, end)
    }
}

impl Azimuth for GeoPoint {
    const FULL_TURN: f64 = 360.;

    fn bearing_to(&self, other: &GeoPoint) -> f64 {
        haversine::bearing(self, other)
    }
}

impl TurnAngle for GeoPoint {
    fn turn_angle(a: &GeoPoint, b: &GeoPoint, c: &GeoPoint) -> f64 {
        crate::metrics::signed_turn_angle(a, b, c).abs()
    }
}
