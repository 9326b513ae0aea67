//! # Stabkit Core
//!
//! Core types and utilities for Stabkit.
//! Provides the fundamental pieces shared by the importer, the walker and
//! the toolpath assembler: error types, SVG length normalization, the 2D
//! affine transform algebra, and machine-space points.

pub mod error;
pub mod transform;
pub mod types;
pub mod units;

pub use error::{ConversionError, DocumentError, Error, Result};
pub use transform::AffineTransform;
pub use types::{format_coordinate, PaperClass, Point2D, PointKey};
pub use units::{length_to_mm, try_length_to_mm, DocumentUnit, UNRESOLVED_DIMENSION_MM};
