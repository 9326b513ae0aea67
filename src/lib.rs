//! # Stabkit
//!
//! Converts SVG drawings into G-code for a single-axis stab press. Small
//! circles and ellipses in the drawing mark the places to stab; the page is
//! mapped onto the machine bed with its centre at the work origin.
//!
//! ## Architecture
//!
//! Stabkit is organized as a workspace with multiple crates:
//!
//! 1. **stabkit-core** - Transform algebra, points, paper classes, units, errors
//! 2. **stabkit-designer** - SVG import, page resolution, marker extraction
//! 3. **stabkit-camtools** - Stab press program assembly and emission
//! 4. **stabkit-settings** - Configuration file handling
//! 5. **stabkit** - Conversion pipeline and command-line binary

pub mod cli;
pub mod pipeline;

pub use pipeline::{convert_document, convert_svg};

pub use stabkit_camtools::{
    LineSink, StabPressGenerator, StabPressParameters, ToolpathProgram, WriterSink,
};
pub use stabkit_core::{AffineTransform, Error, PaperClass, Point2D, Result};
pub use stabkit_designer::{ExtractionOptions, ImportedDocument, SvgImporter};
pub use stabkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so a program written to stdout stays clean
/// - RUST_LOG environment variable support
/// - `warn` by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
