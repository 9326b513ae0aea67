use serde::{Deserialize, Serialize};
use stabkit_core::ConversionError;

use super::{require, MarkerShape};

/// `<ellipse>` geometry as read from the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EllipseGeometry {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
}

impl MarkerShape for EllipseGeometry {
    fn element(&self) -> &'static str {
        "ellipse"
    }

    // Only the X radius decides whether an ellipse is a marker.
    fn marker_radius(&self, id: Option<&str>) -> Result<f64, ConversionError> {
        require(self.rx, self.element(), id, "rx")
    }

    fn center(&self, id: Option<&str>) -> Result<(f64, f64), ConversionError> {
        Ok((
            require(self.cx, self.element(), id, "cx")?,
            require(self.cy, self.element(), id, "cy")?,
        ))
    }
}
