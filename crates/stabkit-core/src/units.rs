//! Unit conversion utilities
//!
//! Normalizes SVG length strings (`"210mm"`, `"8.5in"`, `"744px"`) to
//! millimetres. Document pixels are taken at 3.54 px/mm, the density used by
//! the drawing tools this converter was built for.
//!
//! Lengths with a percentage or an unknown unit cannot be resolved without a
//! layout context; they fall back to [`UNRESOLVED_DIMENSION_MM`].

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use svgtypes::{Length, LengthUnit};

/// Document pixels per millimetre
pub const PX_PER_MM: f64 = 3.54;

/// Fallback used when a length cannot be converted
pub const UNRESOLVED_DIMENSION_MM: f64 = 1024.0;

/// Absolute units a document length may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentUnit {
    /// Bare number, already millimetres
    Bare,
    /// Document pixels
    Px,
    /// Points
    Pt,
    /// Em (16 px)
    Em,
    /// Millimetres
    Mm,
    /// Picas
    Pc,
    /// Centimetres
    Cm,
    /// Inches
    In,
}

impl DocumentUnit {
    /// Multiplier taking a value in this unit to millimetres
    pub fn mm_factor(self) -> f64 {
        match self {
            Self::Bare | Self::Mm => 1.0,
            Self::Px => 1.0 / PX_PER_MM,
            Self::Pt => 1.25 / PX_PER_MM,
            Self::Em => 16.0 / PX_PER_MM,
            Self::Pc => 15.0 / PX_PER_MM,
            Self::Cm => 35.43 / PX_PER_MM,
            Self::In => 90.0 / PX_PER_MM,
        }
    }

    fn from_svg(unit: LengthUnit) -> Option<Self> {
        match unit {
            LengthUnit::None => Some(Self::Bare),
            LengthUnit::Px => Some(Self::Px),
            LengthUnit::Pt => Some(Self::Pt),
            LengthUnit::Em => Some(Self::Em),
            LengthUnit::Mm => Some(Self::Mm),
            LengthUnit::Pc => Some(Self::Pc),
            LengthUnit::Cm => Some(Self::Cm),
            LengthUnit::In => Some(Self::In),
            LengthUnit::Ex | LengthUnit::Percent => None,
        }
    }
}

impl fmt::Display for DocumentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare => write!(f, ""),
            Self::Px => write!(f, "px"),
            Self::Pt => write!(f, "pt"),
            Self::Em => write!(f, "em"),
            Self::Mm => write!(f, "mm"),
            Self::Pc => write!(f, "pc"),
            Self::Cm => write!(f, "cm"),
            Self::In => write!(f, "in"),
        }
    }
}

/// Convert a length string to millimetres
///
/// An empty string is a zero length. Percentages, relative units other than
/// `em`, and unparsable text are reported as
/// [`ConversionError::UnrecognizedUnit`].
pub fn try_length_to_mm(input: &str) -> Result<f64, ConversionError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let unrecognized = || ConversionError::UnrecognizedUnit {
        value: input.to_string(),
    };

    let length = Length::from_str(input).map_err(|_| unrecognized())?;
    let unit = DocumentUnit::from_svg(length.unit).ok_or_else(unrecognized)?;

    Ok(length.number * unit.mm_factor())
}

/// Convert a length string to millimetres, falling back to
/// [`UNRESOLVED_DIMENSION_MM`] when the unit is not recognized
pub fn length_to_mm(input: &str) -> f64 {
    match try_length_to_mm(input) {
        Ok(mm) => mm,
        Err(err) => {
            tracing::warn!("{}; using {} mm", err, UNRESOLVED_DIMENSION_MM);
            UNRESOLVED_DIMENSION_MM
        }
    }
}
