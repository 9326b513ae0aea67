//! # Stabkit CAM Tools
//!
//! Generates G-code for the stab press: a single-axis tool that punches a
//! hole at each marker extracted from a drawing.
//!
//! - **Stab Press**: deduplicates points, picks the coordinate setup, and
//!   emits the program through a [`LineSink`]

pub mod error;
pub mod stab_press;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use stab_press::{
    LineSink, SetupDirective, StabPressGenerator, StabPressParameters, ToolpathProgram,
    ToolpathStep, WriterSink,
};
