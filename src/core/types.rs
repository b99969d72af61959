use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins around the plot area, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.is_finite() && *side >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 40.0, 90.0, 100.0)
    }
}

/// Drawing area derived from a viewport minus its margins.
///
/// Scales map into plot-local coordinates (origin at the plot's top-left);
/// the frame builder translates them into absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and non-negative".to_owned(),
            ));
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area: {width}x{height}"
            )));
        }

        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }

    /// Translates a plot-local coordinate into absolute canvas coordinates.
    #[must_use]
    pub fn to_canvas(self, local_x: f64, local_y: f64) -> (f64, f64) {
        (self.origin_x + local_x, self.origin_y + local_y)
    }
}
