//! Great-circle formulas over longitude/latitude coordinates in
//! degrees. Distances are in kilometers.

use crate::point::{latitude, longitude, Coordinates};

pub const EARTH_RADIUS_KM: f64 = 6371.;

pub fn haversine_distance<C: Coordinates>(fix1: &C, fix2: &C) -> f64 {
    let phi1 = latitude(fix1).to_radians();
    let phi2 = latitude(fix2).to_radians();
    let delta_phi = (latitude(fix2) - latitude(fix1)).to_radians();
    let delta_rho = (longitude(fix2) - longitude(fix1)).to_radians();

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_rho / 2.).sin() * (delta_rho / 2.).sin();

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing from `origin` towards `destination` in degrees,
/// normalized to [0, 360). 0 is due north, 90 due east.
pub fn bearing<C: Coordinates>(origin: &C, destination: &C) -> f64 {
    let phi1 = latitude(origin).to_radians();
    let phi2 = latitude(destination).to_radians();
    let delta_rho = (longitude(destination) - longitude(origin)).to_radians();

    let y = delta_rho.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_rho.cos();

    (y.atan2(x).to_degrees() + 360.) % 360.
}

/// Great-circle interpolation between two coordinates, returning the
/// interpolated `(longitude, latitude)` pair in degrees.
pub fn interpolate_coords<C: Coordinates>(start: &C, end: &C, fraction: f64) -> (f64, f64) {
    let angular = haversine_distance(start, end) / EARTH_RADIUS_KM;
    if angular < 1e-12 {
        let lon = longitude(start) + (longitude(end) - longitude(start)) * fraction;
        let lat = latitude(start) + (latitude(end) - latitude(start)) * fraction;
        return (lon, lat);
    }

    let phi1 = latitude(start).to_radians();
    let lam1 = longitude(start).to_radians();
    let phi2 = latitude(end).to_radians();
    let lam2 = longitude(end).to_radians();

    let a = ((1. - fraction) * angular).sin() / angular.sin();
    let b = (fraction * angular).sin() / angular.sin();

    let x = a * phi1.cos() * lam1.cos() + b * phi2.cos() * lam2.cos();
    let y = a * phi1.cos() * lam1.sin() + b * phi2.cos() * lam2.sin();
    let z = a * phi1.sin() + b * phi2.sin();

    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
    let lon = y.atan2(x).to_degrees();

    (lon, lat)
}

/// Distance in kilometers from `point` to the great-circle segment
/// between `start` and `end`.
///
/// Uses the cross-track formula, falling back to the endpoint distance
/// when the closest approach lies outside the segment.
pub fn cross_track_distance<C: Coordinates>(point: &C, start: &C, end: &C) -> f64 {
    let segment = haversine_distance(start, end) / EARTH_RADIUS_KM;
    if segment < 1e-12 {
        return haversine_distance(point, start);
    }

    let d13 = haversine_distance(start, point) / EARTH_RADIUS_KM;
    let delta = (bearing(start, point) - bearing(start, end)).to_radians();

    // closest approach lies behind the segment start
    if delta.cos() < 0. {
        return haversine_distance(point, start);
    }

    let cross = (d13.sin() * delta.sin()).asin();
    let along = (d13.cos() / cross.cos()).max(-1.).min(1.).acos();

    // closest approach lies beyond the segment end
    if along > segment {
        return haversine_distance(point, end);
    }

    cross.abs() * EARTH_RADIUS_KM
}
