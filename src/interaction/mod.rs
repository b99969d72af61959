use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{XMetric, YMetric};

/// Which axis a reselect touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Visual weight of one clickable axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelEmphasis {
    Active,
    Inactive,
}

/// Selected metric per axis. Exactly one key per axis is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    active_x: XMetric,
    active_y: YMetric,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            active_x: XMetric::Poverty,
            active_y: YMetric::Healthcare,
        }
    }
}

impl AxisSelection {
    #[must_use]
    pub fn new(active_x: XMetric, active_y: YMetric) -> Self {
        Self { active_x, active_y }
    }

    #[must_use]
    pub fn active_x(self) -> XMetric {
        self.active_x
    }

    #[must_use]
    pub fn active_y(self) -> YMetric {
        self.active_y
    }

    /// Applies a click on an X-axis label. Returns `false` when the key was
    /// already active (the click is a no-op).
    pub fn select_x(&mut self, metric: XMetric) -> bool {
        if self.active_x == metric {
            return false;
        }
        self.active_x = metric;
        true
    }

    pub fn select_y(&mut self, metric: YMetric) -> bool {
        if self.active_y == metric {
            return false;
        }
        self.active_y = metric;
        true
    }

    /// Emphasis for the three X labels, in `XMetric::ALL` order.
    #[must_use]
    pub fn x_label_emphasis(self) -> SmallVec<[(XMetric, LabelEmphasis); 3]> {
        XMetric::ALL
            .iter()
            .map(|metric| {
                let emphasis = if *metric == self.active_x {
                    LabelEmphasis::Active
                } else {
                    LabelEmphasis::Inactive
                };
                (*metric, emphasis)
            })
            .collect()
    }

    #[must_use]
    pub fn y_label_emphasis(self) -> SmallVec<[(YMetric, LabelEmphasis); 3]> {
        YMetric::ALL
            .iter()
            .map(|metric| {
                let emphasis = if *metric == self.active_y {
                    LabelEmphasis::Active
                } else {
                    LabelEmphasis::Inactive
                };
                (*metric, emphasis)
            })
            .collect()
    }
}

/// Hover state over the per-point labels. Drives tooltip visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn on_point_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn on_point_leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.hovered.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSelection, HoverState, LabelEmphasis};
    use crate::core::{XMetric, YMetric};

    #[test]
    fn reselecting_active_key_is_a_no_op() {
        let mut selection = AxisSelection::default();
        assert!(!selection.select_x(XMetric::Poverty));
        assert!(!selection.select_y(YMetric::Healthcare));
        assert_eq!(selection, AxisSelection::default());
    }

    #[test]
    fn selecting_new_key_touches_only_that_axis() {
        let mut selection = AxisSelection::default();
        assert!(selection.select_x(XMetric::Age));
        assert_eq!(selection.active_x(), XMetric::Age);
        assert_eq!(selection.active_y(), YMetric::Healthcare);
    }

    #[test]
    fn exactly_one_label_per_axis_is_active() {
        let mut selection = AxisSelection::default();
        selection.select_y(YMetric::Smokes);

        let active_x: Vec<_> = selection
            .x_label_emphasis()
            .iter()
            .filter(|(_, emphasis)| *emphasis == LabelEmphasis::Active)
            .map(|(metric, _)| *metric)
            .collect();
        assert_eq!(active_x, vec![XMetric::Poverty]);

        let active_y: Vec<_> = selection
            .y_label_emphasis()
            .iter()
            .filter(|(_, emphasis)| *emphasis == LabelEmphasis::Active)
            .map(|(metric, _)| *metric)
            .collect();
        assert_eq!(active_y, vec![YMetric::Smokes]);
    }

    #[test]
    fn hover_enter_and_leave_toggle_visibility() {
        let mut hover = HoverState::default();
        assert!(!hover.is_visible());

        hover.on_point_enter(7);
        assert!(hover.is_visible());
        assert_eq!(hover.hovered_index(), Some(7));

        hover.on_point_leave();
        assert!(!hover.is_visible());
    }
}
