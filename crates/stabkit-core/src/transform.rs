//! 2D affine transform algebra.
//!
//! [`AffineTransform`] is the 2×3 matrix `[[a, b, tx], [c, d, ty]]` mapping
//! `(x, y)` to `(a·x + b·y + tx, c·x + d·y + ty)`. It wraps the f64
//! `Transform2D` that lyon re-exports from euclid.
//!
//! Composition follows the SVG convention: `parent.compose(&local)` is
//! `parent ∘ local`, i.e. `local` is applied to a point first.

use crate::error::ConversionError;
use crate::types::Point2D;
use lyon::geom::euclid::default::{Point2D as EuclidPoint, Transform2D};
use lyon::geom::euclid::Angle;
use std::fmt;
use svgtypes::{TransformListParser, TransformListToken};

/// Immutable 2D affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform(Transform2D<f64>);

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform
    pub fn identity() -> Self {
        Self(Transform2D::identity())
    }

    /// Translation by `(tx, ty)`
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self(Transform2D::translation(tx, ty))
    }

    /// Non-uniform scale about the origin
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self(Transform2D::scale(sx, sy))
    }

    /// Rotation about the origin, counter-clockwise in a Y-up frame
    ///
    /// Whole quarter turns produce an exact matrix.
    pub fn rotate(degrees: f64) -> Self {
        let quarters = degrees / 90.0;
        if quarters.is_finite() && quarters.fract() == 0.0 {
            let (sin, cos) = match (quarters as i64).rem_euclid(4) {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            };
            return Self(Transform2D::new(cos, sin, -sin, cos, 0.0, 0.0));
        }
        Self(Transform2D::rotation(Angle::degrees(degrees)))
    }

    /// Build from the row form `[[a, b, tx], [c, d, ty]]`
    pub fn from_rows(rows: [[f64; 3]; 2]) -> Self {
        let [[a, b, tx], [c, d, ty]] = rows;
        Self(Transform2D::new(a, c, b, d, tx, ty))
    }

    /// Build from SVG `matrix(a, b, c, d, e, f)` parameters
    pub fn from_svg_matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self(Transform2D::new(a, b, c, d, e, f))
    }

    /// The row form `[[a, b, tx], [c, d, ty]]`
    pub fn rows(&self) -> [[f64; 3]; 2] {
        let m = &self.0;
        [[m.m11, m.m21, m.m31], [m.m12, m.m22, m.m32]]
    }

    pub fn is_identity(&self) -> bool {
        self.0 == Transform2D::identity()
    }

    /// Compose `self ∘ local`: the result applies `local` first, then `self`.
    ///
    /// Composing with the identity on either side returns the other operand
    /// unchanged.
    pub fn compose(&self, local: &AffineTransform) -> AffineTransform {
        if local.is_identity() {
            return *self;
        }
        if self.is_identity() {
            return *local;
        }
        Self(local.0.then(&self.0))
    }

    /// Map a bare coordinate pair
    pub fn apply_to_point(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.0.transform_point(EuclidPoint::new(x, y));
        (p.x, p.y)
    }

    /// Map a point, keeping its provenance
    pub fn apply(&self, point: &Point2D) -> Point2D {
        let (x, y) = self.apply_to_point(point.x, point.y);
        Point2D {
            x,
            y,
            source: point.source.clone(),
        }
    }

    /// Parse an SVG transform list such as `"translate(10,5) rotate(90)"`.
    ///
    /// Entries are composed left to right, so the rightmost entry applies to
    /// a point first. Empty text is the identity. Anything that does not
    /// parse is a [`ConversionError::MalformedTransform`].
    pub fn parse(text: &str) -> Result<AffineTransform, ConversionError> {
        let mut result = AffineTransform::identity();

        for token in TransformListParser::from(text) {
            let token =
                token.map_err(|e| ConversionError::malformed_transform(text.trim(), e))?;
            result = result.compose(&Self::from_token(token));
        }

        Ok(result)
    }

    fn from_token(token: TransformListToken) -> AffineTransform {
        match token {
            TransformListToken::Matrix { a, b, c, d, e, f } => {
                Self::from_svg_matrix(a, b, c, d, e, f)
            }
            TransformListToken::Translate { tx, ty } => Self::translate(tx, ty),
            TransformListToken::Scale { sx, sy } => Self::scale(sx, sy),
            TransformListToken::Rotate { angle } => Self::rotate(angle),
            TransformListToken::SkewX { angle } => {
                Self::from_svg_matrix(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0)
            }
            TransformListToken::SkewY { angle } => {
                Self::from_svg_matrix(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
            }
        }
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "matrix({},{},{},{},{},{})",
            m.m11, m.m12, m.m21, m.m22, m.m31, m.m32
        )
    }
}
