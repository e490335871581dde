//! Timestamped trajectories and their points.

use std::ops::Deref;

use chrono::{DateTime, TimeZone, Utc};
use failure::Error;

use crate::error::GeomError;
use crate::point::{Azimuth, Coordinates, Point, TurnAngle};
use crate::property::{interpolate_property_maps, scale_duration, PropertyMap, PropertyValue};

/// Point in time attached to trajectory points.
pub type Timestamp = DateTime<Utc>;

/// A position plus a timestamp and named scalar annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint<P: Point<Base = P>> {
    pub position: P,
    pub timestamp: Timestamp,
    pub properties: PropertyMap,
}

impl<P: Point<Base = P>> TrajectoryPoint<P> {
    pub fn new(position: P, timestamp: Timestamp) -> TrajectoryPoint<P> {
        TrajectoryPoint {
            position,
            timestamp,
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> TrajectoryPoint<P> {
        self.properties.insert(name.to_string(), value);
        self
    }

    pub fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.insert(name.to_string(), value);
    }
}

impl<P: Point<Base = P>> Coordinates for TrajectoryPoint<P> {
    const DIM: usize = P::DIM;

    fn coord(&self, axis: usize) -> f64 {
        self.position.coord(axis)
    }
}

impl<P: Point<Base = P>> Point for TrajectoryPoint<P> {
    type Base = P;

    const TIME_UNIT_SECONDS: f64 = P::TIME_UNIT_SECONDS;

    fn from_coords(coords: &[f64]) -> TrajectoryPoint<P> {
        TrajectoryPoint::new(P::from_coords(coords), Utc.timestamp(0, 0))
    }

    fn base(&self) -> P {
        self.position.clone()
    }

    fn distance_to(&self, other: &TrajectoryPoint<P>) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// Interpolates the position, the timestamp and the property map.
    fn interpolate(&self, other: &TrajectoryPoint<P>, fraction: f64) -> TrajectoryPoint<P> {
        let span = other.timestamp.signed_duration_since(self.timestamp);

        TrajectoryPoint {
            position: self.position.interpolate(&other.position, fraction),
            timestamp: self.timestamp + scale_duration(span, fraction),
            properties: interpolate_property_maps(&self.properties, &other.properties, fraction),
        }
    }

    fn distance_to_segment(&self, start: &TrajectoryPoint<P>, end: &TrajectoryPoint<P>) -> f64 {
        self.position.distance_to_segment(&start.position, &end.position)
    }

    fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

impl<P: Azimuth + Point<Base = P>> Azimuth for TrajectoryPoint<P> {
    const FULL_TURN: f64 = P::FULL_TURN;

    fn bearing_to(&self, other: &TrajectoryPoint<P>) -> f64 {
        self.position.bearing_to(&other.position)
    }
}

impl<P: TurnAngle + Point<Base = P>> TurnAngle for TrajectoryPoint<P> {
    fn turn_angle(a: &TrajectoryPoint<P>, b: &TrajectoryPoint<P>, c: &TrajectoryPoint<P>) -> f64 {
        P::turn_angle(&a.position, &b.position, &c.position)
    }
}

/// A time-ordered sequence of points for one moving object.
///
/// Trajectories of length 0 and 1 are legal; the aggregate operations
/// handle them as documented degenerate cases.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<P: Point<Base = P>> {
    points: Vec<TrajectoryPoint<P>>,
}

impl<P: Point<Base = P>> Trajectory<P> {
    /// Build a trajectory, rejecting out-of-order timestamps.
    pub fn new(points: Vec<TrajectoryPoint<P>>) -> Result<Trajectory<P>, Error> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].timestamp > pair[1].timestamp {
                return Err(GeomError::OutOfOrderTimestamps { index: index + 1 }.into());
            }
        }

        Ok(Trajectory { points })
    }

    pub fn empty() -> Trajectory<P> {
        Trajectory { points: Vec::new() }
    }

    /// The points are already known to be in timestamp order.
    pub(crate) fn from_ordered(points: Vec<TrajectoryPoint<P>>) -> Trajectory<P> {
        Trajectory { points }
    }

    pub fn points(&self) -> &[TrajectoryPoint<P>] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [TrajectoryPoint<P>] {
        &mut self.points
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        self.points.first().map(|point| point.timestamp)
    }

    pub fn end_time(&self) -> Option<Timestamp> {
        self.points.last().map(|point| point.timestamp)
    }
}

impl<P: Point<Base = P>> Deref for Trajectory<P> {
    type Target = [TrajectoryPoint<P>];

    fn deref(&self) -> &[TrajectoryPoint<P>] {
        &self.points
    }
}
