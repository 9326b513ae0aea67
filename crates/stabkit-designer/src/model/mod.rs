//! Shape tree model.
//!
//! A document is a tree of [`ShapeNode`]s. Node kinds form a closed set: the
//! walker handles each with one exhaustive match, and anything the converter
//! has no use for is kept as [`ShapeKind::Unsupported`] so it can be skipped
//! without error.
//!
//! Geometry attributes are stored as parsed but unvalidated values: a
//! missing or unparsable number is `None`, and it is the walker that decides
//! whether that matters for a given shape.

use serde::{Deserialize, Serialize};
use stabkit_core::{AffineTransform, ConversionError};

mod circle;
mod ellipse;
mod path;

pub use circle::CircleGeometry;
pub use ellipse::EllipseGeometry;
pub use path::PathGeometry;

/// Which grouping element a group node came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// `<svg>` root or `<g>`
    Group,
    /// `<a>`
    Anchor,
    /// `<switch>`
    Switch,
}

/// The kind-specific part of a node
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Group {
        kind: GroupKind,
        children: Vec<ShapeNode>,
    },
    Path(PathGeometry),
    Circle(CircleGeometry),
    Ellipse(EllipseGeometry),
    /// Any element the converter does not extract points from
    Unsupported { tag: String },
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub kind: ShapeKind,
    /// Local transform; `None` when the element declares none
    pub transform: Option<AffineTransform>,
    pub id: Option<String>,
    pub visible: bool,
}

impl ShapeNode {
    fn with_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            transform: None,
            id: None,
            visible: true,
        }
    }

    /// A `<g>` group
    pub fn group(children: Vec<ShapeNode>) -> Self {
        Self::with_kind(ShapeKind::Group {
            kind: GroupKind::Group,
            children,
        })
    }

    /// An `<a>` or `<switch>` container, or a plain group
    pub fn container(kind: GroupKind, children: Vec<ShapeNode>) -> Self {
        Self::with_kind(ShapeKind::Group { kind, children })
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::with_kind(ShapeKind::Circle(CircleGeometry {
            cx: Some(cx),
            cy: Some(cy),
            r: Some(r),
        }))
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::with_kind(ShapeKind::Ellipse(EllipseGeometry {
            cx: Some(cx),
            cy: Some(cy),
            rx: Some(rx),
            ry: Some(ry),
        }))
    }

    pub fn path(geometry: PathGeometry) -> Self {
        Self::with_kind(ShapeKind::Path(geometry))
    }

    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::with_kind(ShapeKind::Unsupported { tag: tag.into() })
    }

    /// Build a node directly from its kind
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self::with_kind(kind)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Element name this node stands for, for diagnostics
    pub fn tag(&self) -> &str {
        match &self.kind {
            ShapeKind::Group { kind, .. } => match kind {
                GroupKind::Group => "g",
                GroupKind::Anchor => "a",
                GroupKind::Switch => "switch",
            },
            ShapeKind::Path(_) => "path",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Ellipse(_) => "ellipse",
            ShapeKind::Unsupported { tag } => tag.as_str(),
        }
    }

    /// Child nodes; empty for every kind but groups
    pub fn children(&self) -> &[ShapeNode] {
        match &self.kind {
            ShapeKind::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// `parent ∘ local`, or `parent` itself when the node has no transform
    pub fn absolute_transform(&self, parent: &AffineTransform) -> AffineTransform {
        match &self.transform {
            Some(local) => parent.compose(local),
            None => *parent,
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ShapeNode::node_count).sum::<usize>()
    }
}

/// A small round shape whose centre can become a stab point
pub trait MarkerShape {
    /// Element name used in errors
    fn element(&self) -> &'static str;

    /// The radius compared against the marker threshold
    fn marker_radius(&self, id: Option<&str>) -> Result<f64, ConversionError>;

    /// Centre in the shape's local coordinates
    fn center(&self, id: Option<&str>) -> Result<(f64, f64), ConversionError>;

    /// Whether the shape is small enough to be a marker rather than decoration
    fn is_marker(&self, threshold: f64, id: Option<&str>) -> Result<bool, ConversionError> {
        Ok(self.marker_radius(id)? < threshold)
    }
}

pub(crate) fn require(
    value: Option<f64>,
    element: &str,
    id: Option<&str>,
    attribute: &str,
) -> Result<f64, ConversionError> {
    value.ok_or_else(|| ConversionError::missing_geometry(element, id, attribute))
}
