use crate::core::metric::{XMetric, YMetric};
use crate::core::observation::Observation;
use crate::core::scale::LinearScale;
use crate::error::ChartResult;

/// Baseline offset that vertically centers an abbreviation label on its marker.
pub const ABBR_BASELINE_NUDGE_PX: f64 = 4.5;

/// Plot-local pixel position of one observation's marker center.
///
/// The abbreviation label shares the marker's coordinates with a baseline
/// nudge; the circle center itself is unnudged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPlacement {
    pub x: f64,
    pub y: f64,
}

impl PointPlacement {
    #[must_use]
    pub fn abbr_baseline_y(self) -> f64 {
        self.y + ABBR_BASELINE_NUDGE_PX
    }
}

/// Projects every observation through the active scales.
///
/// Output order matches dataset order, so placement indices double as
/// observation indices for hover handling.
pub fn project_observations(
    observations: &[Observation],
    active_x: XMetric,
    active_y: YMetric,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> ChartResult<Vec<PointPlacement>> {
    let mut placements = Vec::with_capacity(observations.len());
    for observation in observations {
        let x = x_scale.value_to_pixel(observation.x_value(active_x))?;
        let y = y_scale.value_to_pixel(observation.y_value(active_y))?;
        placements.push(PointPlacement { x, y });
    }
    Ok(placements)
}
