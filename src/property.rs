//! Named scalar annotations carried by trajectory points.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

/// Property storage on a trajectory point, keyed by name.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A single named value attached to a point.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Real(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl PropertyValue {
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            PropertyValue::Real(value) => Some(value),
            _ => None,
        }
    }

    /// Interpolate between two values.
    ///
    /// Numeric and timestamp values interpolate linearly; anything else
    /// switches from `self` to `other` at the midpoint.
    pub fn interpolate(&self, other: &PropertyValue, fraction: f64) -> PropertyValue {
        match (self, other) {
            (&PropertyValue::Real(first), &PropertyValue::Real(second)) => {
                PropertyValue::Real(first + (second - first) * fraction)
            }
            (&PropertyValue::Timestamp(first), &PropertyValue::Timestamp(second)) => {
                let span = second.signed_duration_since(first);
                PropertyValue::Timestamp(first + scale_duration(span, fraction))
            }
            (first, second) => {
                if fraction < 0.5 {
                    first.clone()
                } else {
                    second.clone()
                }
            }
        }
    }
}

/// Interpolate two property maps key by key.
///
/// Keys present on both sides interpolate their values; keys present on
/// only one side survive on the side of the midpoint nearest to them.
pub fn interpolate_property_maps(
    first: &PropertyMap,
    second: &PropertyMap,
    fraction: f64,
) -> PropertyMap {
    let mut result = PropertyMap::new();

    for (key, value) in first {
        match second.get(key) {
            Some(other) => {
                result.insert(key.clone(), value.interpolate(other, fraction));
            }
            None => {
                if fraction < 0.5 {
                    result.insert(key.clone(), value.clone());
                }
            }
        }
    }

    if fraction >= 0.5 {
        for (key, value) in second {
            if !first.contains_key(key) {
                result.insert(key.clone(), value.clone());
            }
        }
    }

    result
}

pub(crate) fn scale_duration(span: Duration, fraction: f64) -> Duration {
    Duration::milliseconds((span.num_milliseconds() as f64 * fraction).round() as i64)
}
