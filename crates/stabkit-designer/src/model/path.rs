use svgtypes::{PathParser, PathSegment};

/// `<path>` geometry: the parsed segments of its `d` attribute
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub segments: Vec<PathSegment>,
}

impl PathGeometry {
    /// Parse path data.
    ///
    /// Like SVG renderers, keeps every segment up to the first error and
    /// drops the rest.
    pub fn parse(data: &str) -> Self {
        let mut segments = Vec::new();

        for segment in PathParser::from(data) {
            match segment {
                Ok(segment) => segments.push(segment),
                Err(e) => {
                    tracing::warn!(
                        "Path data truncated after {} segments: {}",
                        segments.len(),
                        e
                    );
                    break;
                }
            }
        }

        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Terminal coordinate of every segment that ends on a new point, in
    /// absolute local coordinates.
    ///
    /// Close-path, horizontal and vertical segments move the pen but carry
    /// no coordinate pair of their own and are not reported.
    pub fn anchor_vertices(&self) -> Vec<(f64, f64)> {
        let mut vertices = Vec::with_capacity(self.segments.len());
        let mut current = (0.0, 0.0);
        let mut subpath_start = (0.0, 0.0);

        let resolve = |abs: bool, x: f64, y: f64, current: (f64, f64)| {
            if abs {
                (x, y)
            } else {
                (current.0 + x, current.1 + y)
            }
        };

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo { abs, x, y } => {
                    current = resolve(abs, x, y, current);
                    subpath_start = current;
                    vertices.push(current);
                }
                PathSegment::LineTo { abs, x, y }
                | PathSegment::CurveTo { abs, x, y, .. }
                | PathSegment::SmoothCurveTo { abs, x, y, .. }
                | PathSegment::Quadratic { abs, x, y, .. }
                | PathSegment::SmoothQuadratic { abs, x, y }
                | PathSegment::EllipticalArc { abs, x, y, .. } => {
                    current = resolve(abs, x, y, current);
                    vertices.push(current);
                }
                PathSegment::HorizontalLineTo { abs, x } => {
                    current.0 = if abs { x } else { current.0 + x };
                }
                PathSegment::VerticalLineTo { abs, y } => {
                    current.1 = if abs { y } else { current.1 + y };
                }
                PathSegment::ClosePath { .. } => {
                    current = subpath_start;
                }
            }
        }

        vertices
    }
}
