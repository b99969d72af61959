//! Layout of the six clickable axis labels.
//!
//! X labels stack below the plot at its horizontal center; Y labels rotate
//! -90 degrees and stack left of the plot at its vertical center. Offsets
//! mirror the original chart: rows 20 px apart, the first row 20 px past the
//! label block origin.

use smallvec::SmallVec;

use crate::core::types::PlotArea;
use crate::core::{XMetric, YMetric};
use crate::interaction::{AxisSelection, LabelEmphasis};

const X_LABEL_BLOCK_OFFSET_Y: f64 = 20.0;
const Y_LABEL_BLOCK_OFFSET_X: f64 = -20.0;
const LABEL_ROW_SPACING: f64 = 20.0;

/// One clickable X-axis label, anchored in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XLabelPlacement {
    pub metric: XMetric,
    pub x: f64,
    pub y: f64,
    pub emphasis: LabelEmphasis,
}

/// One clickable Y-axis label; rendered rotated -90 degrees around its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YLabelPlacement {
    pub metric: YMetric,
    pub x: f64,
    pub y: f64,
    pub emphasis: LabelEmphasis,
}

#[must_use]
pub fn x_label_placements(
    plot: PlotArea,
    selection: AxisSelection,
) -> SmallVec<[XLabelPlacement; 3]> {
    let block_x = plot.origin_x + plot.width / 2.0;
    let block_y = plot.origin_y + plot.height + X_LABEL_BLOCK_OFFSET_Y;

    selection
        .x_label_emphasis()
        .iter()
        .enumerate()
        .map(|(row, (metric, emphasis))| XLabelPlacement {
            metric: *metric,
            x: block_x,
            y: block_y + LABEL_ROW_SPACING * (row + 1) as f64,
            emphasis: *emphasis,
        })
        .collect()
}

#[must_use]
pub fn y_label_placements(
    plot: PlotArea,
    selection: AxisSelection,
) -> SmallVec<[YLabelPlacement; 3]> {
    let block_x = plot.origin_x + Y_LABEL_BLOCK_OFFSET_X;
    let block_y = plot.origin_y + plot.height / 2.0;

    selection
        .y_label_emphasis()
        .iter()
        .enumerate()
        .map(|(row, (metric, emphasis))| YLabelPlacement {
            metric: *metric,
            x: block_x - LABEL_ROW_SPACING * (row + 1) as f64,
            y: block_y,
            emphasis: *emphasis,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{x_label_placements, y_label_placements};
    use crate::core::types::{Margins, PlotArea, Viewport};
    use crate::interaction::{AxisSelection, LabelEmphasis};

    fn plot() -> PlotArea {
        PlotArea::from_viewport(Viewport::new(960, 500), Margins::default()).expect("plot area")
    }

    #[test]
    fn x_labels_stack_below_plot_center() {
        let placements = x_label_placements(plot(), AxisSelection::default());
        assert_eq!(placements.len(), 3);

        let center = 100.0 + 820.0 / 2.0;
        for placement in &placements {
            assert_eq!(placement.x, center);
        }
        assert_eq!(placements[0].y, 20.0 + 390.0 + 20.0 + 20.0);
        assert_eq!(placements[2].y - placements[0].y, 40.0);
    }

    #[test]
    fn y_labels_stack_left_of_plot() {
        let placements = y_label_placements(plot(), AxisSelection::default());
        assert_eq!(placements.len(), 3);

        let mid = 20.0 + 390.0 / 2.0;
        for placement in &placements {
            assert_eq!(placement.y, mid);
        }
        assert_eq!(placements[0].x, 100.0 - 20.0 - 20.0);
        assert_eq!(placements[0].x - placements[2].x, 40.0);
    }

    #[test]
    fn emphasis_follows_selection() {
        let placements = x_label_placements(plot(), AxisSelection::default());
        assert_eq!(placements[0].emphasis, LabelEmphasis::Active);
        assert_eq!(placements[1].emphasis, LabelEmphasis::Inactive);
        assert_eq!(placements[2].emphasis, LabelEmphasis::Inactive);
    }
}
