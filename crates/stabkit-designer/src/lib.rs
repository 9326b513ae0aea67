//! # Stabkit Designer
//!
//! Reads a drawing and finds the places the stab tool must visit.
//!
//! ## Components
//!
//! - **Import**: loads an SVG document into a read-only [`ShapeNode`] tree
//!   plus its declared [`PageGeometry`]
//! - **Page**: resolves the seed transform that maps the page onto the
//!   machine bed, and classifies the paper size
//! - **Walker**: lazily walks the tree depth-first, yielding marker centres
//!   (and optionally path vertices) in machine coordinates
//!
//! ```text
//! SvgImporter ──► ImportedDocument { root, page }
//!                          │            │
//!                          │       page::resolve ──► PageSetup { seed, .. }
//!                          ▼                              │
//!              ShapeWalker::children_of(root, seed) ◄─────┘
//!                          │
//!                          ▼
//!              ExtractedPoints { points, origin }
//! ```

pub mod import;
pub mod model;
pub mod page;
pub mod walker;

pub use import::{ImportedDocument, SvgImporter};
pub use model::{
    CircleGeometry, EllipseGeometry, GroupKind, MarkerShape, PathGeometry, ShapeKind, ShapeNode,
};
pub use page::{resolve, PageGeometry, PageSetup, ViewBox};
pub use walker::{ExtractedPoints, ExtractionOptions, ShapeWalker};
