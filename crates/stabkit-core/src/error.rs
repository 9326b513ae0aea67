//! Error handling for Stabkit
//!
//! Provides the error types shared by every layer of the conversion:
//! - Conversion errors (transforms, shape geometry, units)
//! - Document errors (loading the SVG tree)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Conversion error type
///
/// Represents failures while turning document geometry into machine
/// coordinates. [`ConversionError::UnrecognizedUnit`] is recovered from by
/// [`crate::length_to_mm`]; every other variant aborts the whole run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A transform attribute could not be parsed
    #[error("Malformed transform '{transform}': {reason}")]
    MalformedTransform {
        /// The offending transform text.
        transform: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A marker shape is missing an attribute it needs
    #[error("Missing geometry on <{element}>{}: attribute '{attribute}'", id_suffix(.id))]
    MissingGeometry {
        /// The element kind (`circle`, `ellipse`).
        element: String,
        /// The element id, when it has one.
        id: Option<String>,
        /// The missing or unparsable attribute.
        attribute: String,
    },

    /// A length used a unit with no millimetre conversion
    #[error("Unrecognized unit in length '{value}'")]
    UnrecognizedUnit {
        /// The length text as written in the document.
        value: String,
    },
}

fn id_suffix(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" #{}", id),
        None => String::new(),
    }
}

impl ConversionError {
    /// Create a malformed transform error
    pub fn malformed_transform(transform: impl Into<String>, reason: impl ToString) -> Self {
        ConversionError::MalformedTransform {
            transform: transform.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a missing geometry error
    pub fn missing_geometry(
        element: impl Into<String>,
        id: Option<&str>,
        attribute: impl Into<String>,
    ) -> Self {
        ConversionError::MissingGeometry {
            element: element.into(),
            id: id.map(str::to_string),
            attribute: attribute.into(),
        }
    }
}

/// Document error type
///
/// Represents failures while loading the document tree itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The document is not well-formed XML
    #[error("Invalid XML: {reason}")]
    InvalidXml {
        /// The parser's description of the problem.
        reason: String,
    },

    /// The root element is not an SVG root
    #[error("Unexpected root element <{tag}>, expected <svg>")]
    UnexpectedRoot {
        /// The root element's tag name.
        tag: String,
    },

    /// The root viewBox is not four numbers with a positive size
    #[error("Invalid viewBox '{value}'")]
    InvalidViewBox {
        /// The viewBox text as written in the document.
        value: String,
    },
}

/// Main error type for Stabkit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Conversion error
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a conversion error
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
