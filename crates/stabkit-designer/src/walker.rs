//! Shape tree walker.
//!
//! [`ShapeWalker`] is a lazy depth-first iterator over a [`ShapeNode`] tree
//! that yields stab points in machine coordinates, in document order. It
//! keeps its own frame stack instead of recursing, so deeply nested drawings
//! cannot overflow the call stack.
//!
//! The walker never mutates the tree: each frame carries the absolute
//! transform inherited from its ancestors and composes it with the node's
//! local transform on the fly.

use crate::model::{MarkerShape, ShapeKind, ShapeNode};
use serde::{Deserialize, Serialize};
use stabkit_core::{AffineTransform, ConversionError, Point2D};
use std::iter::FusedIterator;

/// Id of the shape marking the calibration origin
pub const DEFAULT_ORIGIN_ID: &str = "origin";

/// Radius, in document units, below which a circle or ellipse is a marker
pub const DEFAULT_MARKER_RADIUS_THRESHOLD: f64 = 6.0;

/// What the walker extracts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Take small circles and ellipses as markers
    pub use_circles: bool,
    /// Take path vertices as points
    pub use_paths: bool,
    /// Exclusive upper bound on a marker's radius (pre-transform)
    pub marker_radius_threshold: f64,
    /// Id of the calibration origin marker
    pub origin_id: String,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            use_circles: true,
            use_paths: false,
            marker_radius_threshold: DEFAULT_MARKER_RADIUS_THRESHOLD,
            origin_id: DEFAULT_ORIGIN_ID.to_string(),
        }
    }
}

/// Everything a walk produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPoints {
    /// Points in document order, duplicates included
    pub points: Vec<Point2D>,
    /// Projected centre of the calibration origin marker, if the drawing has one
    pub origin: Option<Point2D>,
}

enum Frame<'a> {
    Node {
        node: &'a ShapeNode,
        inherited: AffineTransform,
    },
    Vertices {
        vertices: std::vec::IntoIter<(f64, f64)>,
        transform: AffineTransform,
        source: Option<&'a str>,
    },
}

/// Lazy, single-pass point extractor
pub struct ShapeWalker<'a> {
    stack: Vec<Frame<'a>>,
    options: &'a ExtractionOptions,
    origin: Option<Point2D>,
    failed: bool,
}

impl<'a> ShapeWalker<'a> {
    /// Walk `node` and its subtree, with `inherited` as the ancestors'
    /// absolute transform.
    pub fn new(
        node: &'a ShapeNode,
        inherited: AffineTransform,
        options: &'a ExtractionOptions,
    ) -> Self {
        Self {
            stack: vec![Frame::Node { node, inherited }],
            options,
            origin: None,
            failed: false,
        }
    }

    /// Walk only the children of `node`, with `inherited` standing in for
    /// `node`'s own absolute transform.
    ///
    /// Used for the document root, whose transform is already folded into
    /// the page seed. A hidden `node` yields nothing.
    pub fn children_of(
        node: &'a ShapeNode,
        inherited: AffineTransform,
        options: &'a ExtractionOptions,
    ) -> Self {
        let mut walker = Self {
            stack: Vec::new(),
            options,
            origin: None,
            failed: false,
        };
        if node.visible {
            walker.push_children(node.children(), inherited);
        }
        walker
    }

    /// Drain the walker, stopping at the first error
    pub fn collect_points(mut self) -> Result<ExtractedPoints, ConversionError> {
        let mut points = Vec::new();
        for point in self.by_ref() {
            points.push(point?);
        }

        tracing::debug!(
            "Extracted {} points, origin {}",
            points.len(),
            if self.origin.is_some() { "found" } else { "absent" }
        );

        Ok(ExtractedPoints {
            points,
            origin: self.origin,
        })
    }

    fn push_children(&mut self, children: &'a [ShapeNode], inherited: AffineTransform) {
        // Reversed so the first child is popped first.
        self.stack.extend(
            children
                .iter()
                .rev()
                .map(|node| Frame::Node { node, inherited }),
        );
    }

    fn visit(
        &mut self,
        node: &'a ShapeNode,
        inherited: AffineTransform,
    ) -> Result<Option<Point2D>, ConversionError> {
        if !node.visible {
            tracing::debug!("Skipping hidden <{}> subtree", node.tag());
            return Ok(None);
        }

        match &node.kind {
            ShapeKind::Group { children, .. } => {
                self.push_children(children, node.absolute_transform(&inherited));
                Ok(None)
            }
            ShapeKind::Path(path) => {
                if self.options.use_paths {
                    let vertices = path.anchor_vertices();
                    if !vertices.is_empty() {
                        self.stack.push(Frame::Vertices {
                            vertices: vertices.into_iter(),
                            transform: node.absolute_transform(&inherited),
                            source: node.id.as_deref(),
                        });
                    }
                }
                Ok(None)
            }
            ShapeKind::Circle(circle) => self.visit_marker(circle, node, inherited),
            ShapeKind::Ellipse(ellipse) => self.visit_marker(ellipse, node, inherited),
            ShapeKind::Unsupported { tag } => {
                tracing::trace!("Skipping unsupported <{}>", tag);
                Ok(None)
            }
        }
    }

    fn visit_marker(
        &mut self,
        shape: &impl MarkerShape,
        node: &ShapeNode,
        inherited: AffineTransform,
    ) -> Result<Option<Point2D>, ConversionError> {
        if !self.options.use_circles {
            return Ok(None);
        }

        let id = node.id.as_deref();
        if !shape.is_marker(self.options.marker_radius_threshold, id)? {
            tracing::debug!(
                "Skipping <{}>{}: radius not below {}",
                shape.element(),
                id.map(|id| format!(" #{}", id)).unwrap_or_default(),
                self.options.marker_radius_threshold
            );
            return Ok(None);
        }

        let (cx, cy) = shape.center(id)?;
        let point = node
            .absolute_transform(&inherited)
            .apply(&Point2D::new(cx, cy).with_source(id));

        if self.origin.is_none() && id == Some(self.options.origin_id.as_str()) {
            tracing::debug!("Calibration origin at {}", point);
            self.origin = Some(point.clone());
        }

        Ok(Some(point))
    }
}

impl Iterator for ShapeWalker<'_> {
    type Item = Result<Point2D, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Vertices {
                    mut vertices,
                    transform,
                    source,
                } => {
                    if let Some((x, y)) = vertices.next() {
                        let point = transform.apply(&Point2D::new(x, y).with_source(source));
                        self.stack.push(Frame::Vertices {
                            vertices,
                            transform,
                            source,
                        });
                        return Some(Ok(point));
                    }
                }
                Frame::Node { node, inherited } => match self.visit(node, inherited) {
                    Ok(Some(point)) => return Some(Ok(point)),
                    Ok(None) => {}
                    Err(e) => {
                        self.failed = true;
                        self.stack.clear();
                        return Some(Err(e));
                    }
                },
            }
        }

        None
    }
}

impl FusedIterator for ShapeWalker<'_> {}
