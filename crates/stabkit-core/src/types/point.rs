//! Machine-space points.
//!
//! Points are compared the way they are written out: two points are the
//! same stab location when their coordinates format identically at the
//! emission precision of two decimals, with `-0.00` and `0.00` counted as
//! one location.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of decimals used for XY coordinates in emitted programs
pub const COORDINATE_PRECISION: usize = 2;

/// Format a coordinate at emission precision
///
/// The sign is kept, so a value that rounds to zero from below is written
/// as `-0.00`.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION, value)
}

/// Coordinate text used for point identity: negative zero becomes `0.00`
fn key_coordinate(value: f64) -> String {
    let text = format_coordinate(value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Identity of a point at emission precision
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    pub x: String,
    pub y: String,
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{} Y{}", self.x, self.y)
    }
}

/// A point in machine coordinates (millimetres)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
    /// Id of the shape this point was taken from, for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, source: None }
    }

    /// Attach the id of the originating shape
    pub fn with_source(mut self, source: Option<impl Into<String>>) -> Self {
        self.source = source.map(Into::into);
        self
    }

    /// The point's identity at emission precision
    pub fn key(&self) -> PointKey {
        PointKey {
            x: key_coordinate(self.x),
            y: key_coordinate(self.y),
        }
    }

    /// Offset by `(dx, dy)`, keeping provenance
    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D {
            x: self.x + dx,
            y: self.y + dy,
            source: self.source.clone(),
        }
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
