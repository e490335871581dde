use chrono::{DateTime, Utc};

/// Error conditions surfaced by the trajectory algorithms.
///
/// Empty inputs to aggregate operations are not errors; those return
/// `None` instead.
#[derive(Debug, Fail)]
pub enum GeomError {
    /// Two points carry the same timestamp, so no speed is defined
    /// between them.
    #[fail(display = "zero elapsed time between points at {}", _0)]
    ZeroElapsedTime(DateTime<Utc>),

    /// The second point of a pair is earlier than the first.
    #[fail(display = "reversed timestamps: {} is earlier than {}", second, first)]
    ReversedTimestamps {
        first: DateTime<Utc>,
        second: DateTime<Utc>,
    },

    /// A trajectory was built from points whose timestamps decrease.
    #[fail(display = "trajectory timestamps out of order at point {}", index)]
    OutOfOrderTimestamps { index: usize },

    /// Bounding box corners are swapped on at least one axis.
    #[fail(display = "bounding box corners are swapped on axis {}", axis)]
    SwappedCorners { axis: usize },
}
