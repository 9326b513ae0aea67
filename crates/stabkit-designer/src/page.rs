//! Page geometry resolution.
//!
//! Turns the root element's viewBox and physical size into the seed
//! transform that maps viewport coordinates onto the machine bed: millimetre
//! scale, page centre at the work origin, Y pointing up, and the page turned
//! so that A4-class sheets lie in portrait and A3-class sheets in landscape.

use serde::{Deserialize, Serialize};
use stabkit_core::{AffineTransform, PaperClass};

/// The root `viewBox`, in viewport units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Declared page geometry, with physical sizes already in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageGeometry {
    pub view_box: Option<ViewBox>,
    /// Physical width; the viewBox width when the document declares none
    pub width_mm: Option<f64>,
    /// Physical height; the viewBox height when the document declares none
    pub height_mm: Option<f64>,
}

impl PageGeometry {
    pub fn new(view_box: ViewBox, width_mm: f64, height_mm: f64) -> Self {
        Self {
            view_box: Some(view_box),
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
        }
    }
}

/// Result of resolving a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Maps root-viewport coordinates to machine millimetres
    pub seed: AffineTransform,
    pub paper_class: PaperClass,
    /// 0 or 90
    pub rotation_degrees: f64,
    /// Orientation of the page as drawn, before any rotation
    pub portrait: bool,
    pub width_mm: f64,
    pub height_mm: f64,
    pub has_view_box: bool,
}

impl PageSetup {
    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees != 0.0
    }

    /// Comment lines describing the page, for the program header
    ///
    /// The orientation flag is written as `True` or `False`, the form
    /// existing stab press programs carry.
    pub fn diagnostics(&self) -> Vec<String> {
        if !self.has_view_box {
            return Vec::new();
        }

        let mut lines = vec![format!(
            "(dw:{:.6} dh:{:.6} portrait:{} papersize:{})",
            self.width_mm,
            self.height_mm,
            if self.portrait { "True" } else { "False" },
            self.paper_class
        )];
        if self.is_rotated() {
            lines.push("(rotated)".to_string());
        }
        lines
    }
}

/// Resolve the seed transform for a page.
///
/// `root_transform` is the root element's own transform; it is applied to
/// viewport coordinates before the page mapping.
pub fn resolve(page: &PageGeometry, root_transform: Option<&AffineTransform>) -> PageSetup {
    let identity = AffineTransform::identity();
    let root = root_transform.unwrap_or(&identity);

    let Some(view_box) = page.view_box else {
        tracing::debug!("No viewBox; document coordinates used as machine coordinates");
        return PageSetup {
            seed: *root,
            paper_class: PaperClass::default(),
            rotation_degrees: 0.0,
            portrait: false,
            width_mm: page.width_mm.unwrap_or(0.0),
            height_mm: page.height_mm.unwrap_or(0.0),
            has_view_box: false,
        };
    };

    let dw = page.width_mm.unwrap_or(view_box.width);
    let dh = page.height_mm.unwrap_or(view_box.height);

    // Physical half-size measured from the viewBox origin.
    let center_x = view_box.x + dw / 2.0;
    let center_y = view_box.y + dh / 2.0;

    let portrait = dh > dw;
    let paper_class = PaperClass::classify(dw, dh);
    let rotate = portrait != paper_class.prefers_portrait();
    let rotation_degrees = if rotate { 90.0 } else { 0.0 };

    tracing::debug!(
        "Page {:.3}x{:.3} mm, portrait={}, paper={}, rotation={}",
        dw,
        dh,
        portrait,
        paper_class,
        rotation_degrees
    );

    let seed = AffineTransform::scale(1.0, -1.0)
        .compose(&AffineTransform::rotate(rotation_degrees))
        .compose(&AffineTransform::translate(-center_x, -center_y))
        .compose(&AffineTransform::scale(
            dw / view_box.width,
            dh / view_box.height,
        ))
        .compose(root);

    PageSetup {
        seed,
        paper_class,
        rotation_degrees,
        portrait,
        width_mm: dw,
        height_mm: dh,
        has_view_box: true,
    }
}
