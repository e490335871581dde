//! Geometric algorithms for moving-object trajectories.
//!
//! Points live in one of three coordinate domains: terrestrial
//! (longitude/latitude in degrees, distances in kilometers, speeds in
//! km/h), flat 2d and flat 3d (native units, speeds in units per
//! second). All algorithms are generic over the point type, so points
//! from different domains cannot be mixed in a single call.

#[macro_use] extern crate cfg_if;
#[macro_use] extern crate failure;
#[macro_use] extern crate log;

extern crate chrono;
extern crate flat_projection;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod bbox;
pub mod cartesian;
pub mod error;
pub mod flat;
pub mod haversine;
pub mod hull;
pub mod interpolate;
pub mod metrics;
mod parallel;
pub mod point;
pub mod property;
pub mod simplify;
pub mod summary;
pub mod terrestrial;
pub mod trajectory;

pub use crate::bbox::{compute_bounding_box, BoundingBox};
pub use crate::cartesian::{CartesianPoint, CartesianPoint3};
pub use crate::error::GeomError;
pub use crate::point::{altitude, latitude, longitude, x, y, Azimuth, Coordinates, Point, TurnAngle};
pub use crate::property::{PropertyMap, PropertyValue};
pub use crate::terrestrial::GeoPoint;
pub use crate::trajectory::{Timestamp, Trajectory, TrajectoryPoint};
