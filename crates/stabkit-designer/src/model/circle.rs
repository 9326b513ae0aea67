use serde::{Deserialize, Serialize};
use stabkit_core::ConversionError;

use super::{require, MarkerShape};

/// `<circle>` geometry as read from the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
}

impl MarkerShape for CircleGeometry {
    fn element(&self) -> &'static str {
        "circle"
    }

    fn marker_radius(&self, id: Option<&str>) -> Result<f64, ConversionError> {
        require(self.r, self.element(), id, "r")
    }

    fn center(&self, id: Option<&str>) -> Result<(f64, f64), ConversionError> {
        Ok((
            require(self.cx, self.element(), id, "cx")?,
            require(self.cy, self.element(), id, "cy")?,
        ))
    }
}
