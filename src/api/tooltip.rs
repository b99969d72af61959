use crate::core::Observation;
use crate::interaction::AxisSelection;

/// Tooltip text block for one hovered observation.
///
/// Both metric lines are built from the selection at assembly time, so the
/// content always names the currently active metrics. Display labels are used
/// for both axes (the original leaked the raw key for the unswitched axis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub heading: String,
    pub x_line: String,
    pub y_line: String,
}

impl TooltipContent {
    #[must_use]
    pub fn for_observation(observation: &Observation, selection: AxisSelection) -> Self {
        let active_x = selection.active_x();
        let active_y = selection.active_y();

        Self {
            heading: observation.state.clone(),
            x_line: format!(
                "{} {}",
                active_x.tooltip_label(),
                format_metric_value(observation.x_value(active_x))
            ),
            y_line: format!(
                "{} {}",
                active_y.tooltip_label(),
                format_metric_value(observation.y_value(active_y))
            ),
        }
    }

    #[must_use]
    pub fn lines(&self) -> [&str; 3] {
        [&self.heading, &self.x_line, &self.y_line]
    }
}

/// Integer-valued metrics (household income) print without a decimal tail.
fn format_metric_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_metric_value;

    #[test]
    fn metric_values_format_without_noise() {
        assert_eq!(format_metric_value(42_830.0), "42830");
        assert_eq!(format_metric_value(19.3), "19.3");
        assert_eq!(format_metric_value(12.35), "12.35");
    }
}
