//! Paper size classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page side, in millimetres, still classed as A4
pub const A4_MAX_SIDE_MM: f64 = 300.0;

/// Coarse paper-size bucket driving orientation and work coordinate choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperClass {
    /// Both sides at most 300 mm; worked in portrait
    A4,
    /// Any side above 300 mm; worked in landscape
    A3,
}

impl Default for PaperClass {
    fn default() -> Self {
        Self::A4
    }
}

impl PaperClass {
    /// Classify a page by its physical size
    pub fn classify(width_mm: f64, height_mm: f64) -> Self {
        if width_mm.max(height_mm) <= A4_MAX_SIDE_MM {
            Self::A4
        } else {
            Self::A3
        }
    }

    /// Whether pages of this class are worked in portrait orientation
    pub fn prefers_portrait(self) -> bool {
        matches!(self, Self::A4)
    }

    /// Paper number, as in "A4"
    pub fn number(self) -> u8 {
        match self {
            Self::A4 => 4,
            Self::A3 => 3,
        }
    }

    /// Work coordinate system whose origin sits at the centre of this paper size
    pub fn work_coordinate_system(self) -> &'static str {
        match self {
            Self::A4 => "G54",
            Self::A3 => "G57",
        }
    }
}

impl fmt::Display for PaperClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.number())
    }
}
