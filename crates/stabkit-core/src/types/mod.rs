//! Shared value types.
//!
//! ## Modules
//!
//! - [`point`]: Machine-space points and their emission-precision identity
//! - [`paper`]: Coarse paper-size classification

pub mod paper;
pub mod point;

pub use paper::PaperClass;
pub use point::{format_coordinate, Point2D, PointKey};
