use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::core::projection::project_observations;
use crate::core::types::PlotArea;
use crate::core::{
    CoordinateTween, EasingFn, LinearScale, PointPlacement, TransitionClock, XMetric, YMetric,
    ease_cubic_in_out,
};
use crate::dataset::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{Axis, AxisSelection, HoverState};
use crate::render::{RenderFrame, Renderer};

use super::engine_config::ChartEngineConfig;
use super::frame_builder::{FrameInputs, build_frame};
use super::render_style::RenderStyle;
use super::tooltip::TooltipContent;

/// In-flight reselect animation for one axis.
struct AxisTransition {
    tweens: Vec<CoordinateTween>,
    clock: TransitionClock,
    easing: EasingFn,
}

impl AxisTransition {
    fn eased_progress(&self) -> f64 {
        (self.easing)(self.clock.progress())
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the axis selection, the scales, hover
/// state, the in-flight transitions, and the renderer. Hosts forward their
/// event loop into `select_*_metric` / `point_enter` / `point_leave`, drive
/// animation with `advance`, and call `render` per frame.
///
/// Each axis animates independently, so a click on one axis label never
/// interrupts a transition still running on the other.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    style: RenderStyle,
    plot: PlotArea,
    dataset: Dataset,
    selection: AxisSelection,
    hover: HoverState,
    x_scale: LinearScale,
    y_scale: LinearScale,
    target_placements: Vec<PointPlacement>,
    x_transition: Option<AxisTransition>,
    y_transition: Option<AxisTransition>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig, dataset: Dataset) -> ChartResult<Self> {
        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
        let selection = AxisSelection::new(config.initial_x, config.initial_y);

        let x_scale = LinearScale::x_from_observations_tuned(
            dataset.observations(),
            selection.active_x(),
            plot,
            config.x_domain_tuning,
        )?;
        let y_scale = LinearScale::y_from_observations_tuned(
            dataset.observations(),
            selection.active_y(),
            plot,
            config.y_domain_tuning,
        )?;
        let target_placements = project_observations(
            dataset.observations(),
            selection.active_x(),
            selection.active_y(),
            x_scale,
            y_scale,
        )?;

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            plot,
            dataset,
            selection,
            hover: HoverState::default(),
            x_scale,
            y_scale,
            target_placements,
            x_transition: None,
            y_transition: None,
        })
    }

    /// Single-shot dataset load; any read or parse failure aborts construction.
    pub fn from_csv_path(
        renderer: R,
        config: ChartEngineConfig,
        path: impl AsRef<Path>,
    ) -> ChartResult<Self> {
        let dataset = Dataset::from_path(path)?;
        Self::new(renderer, config, dataset)
    }

    /// Applies a click on the X-axis label for `metric`.
    ///
    /// Returns `false` (and changes nothing) when `metric` is already active.
    /// Otherwise recomputes the X scale over the full dataset and starts a
    /// fixed-duration transition from the current, possibly mid-flight,
    /// positions.
    pub fn select_x_metric(&mut self, metric: XMetric) -> ChartResult<bool> {
        let current = self.current_placements();
        if !self.selection.select_x(metric) {
            return Ok(false);
        }
        debug!(metric = metric.key(), "x axis reselect");

        self.x_scale = LinearScale::x_from_observations_tuned(
            self.dataset.observations(),
            metric,
            self.plot,
            self.config.x_domain_tuning,
        )?;
        self.retarget(Axis::X, current)
    }

    pub fn select_y_metric(&mut self, metric: YMetric) -> ChartResult<bool> {
        let current = self.current_placements();
        if !self.selection.select_y(metric) {
            return Ok(false);
        }
        debug!(metric = metric.key(), "y axis reselect");

        self.y_scale = LinearScale::y_from_observations_tuned(
            self.dataset.observations(),
            metric,
            self.plot,
            self.config.y_domain_tuning,
        )?;
        self.retarget(Axis::Y, current)
    }

    fn retarget(&mut self, axis: Axis, current: Vec<PointPlacement>) -> ChartResult<bool> {
        self.target_placements = project_observations(
            self.dataset.observations(),
            self.selection.active_x(),
            self.selection.active_y(),
            self.x_scale,
            self.y_scale,
        )?;

        let tweens = current
            .iter()
            .zip(&self.target_placements)
            .map(|(from, to)| match axis {
                Axis::X => CoordinateTween::new(from.x, to.x),
                Axis::Y => CoordinateTween::new(from.y, to.y),
            })
            .collect();

        let transition = AxisTransition {
            tweens,
            clock: TransitionClock::new(self.transition_duration()),
            easing: ease_cubic_in_out,
        };
        match axis {
            Axis::X => self.x_transition = Some(transition),
            Axis::Y => self.y_transition = Some(transition),
        }
        Ok(true)
    }

    /// Advances the in-flight transitions; completed ones are dropped.
    pub fn advance(&mut self, dt: Duration) {
        for slot in [&mut self.x_transition, &mut self.y_transition] {
            if let Some(transition) = slot {
                transition.clock.advance(dt);
                if transition.clock.is_finished() {
                    *slot = None;
                }
            }
        }
    }

    /// Current marker positions in plot-local pixels.
    ///
    /// A coordinate whose axis is mid-transition is interpolated; a settled
    /// coordinate sits at its target.
    #[must_use]
    pub fn current_placements(&self) -> Vec<PointPlacement> {
        if self.x_transition.is_none() && self.y_transition.is_none() {
            return self.target_placements.clone();
        }

        let x_flight = self
            .x_transition
            .as_ref()
            .map(|transition| (transition, transition.eased_progress()));
        let y_flight = self
            .y_transition
            .as_ref()
            .map(|transition| (transition, transition.eased_progress()));

        self.target_placements
            .iter()
            .enumerate()
            .map(|(index, target)| PointPlacement {
                x: x_flight
                    .map_or(target.x, |(transition, eased)| {
                        transition.tweens[index].at(eased)
                    }),
                y: y_flight
                    .map_or(target.y, |(transition, eased)| {
                        transition.tweens[index].at(eased)
                    }),
            })
            .collect()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.x_transition.is_some() || self.y_transition.is_some()
    }

    pub fn point_enter(&mut self, index: usize) -> ChartResult<()> {
        if index >= self.dataset.len() {
            return Err(ChartError::InvalidData(format!(
                "hover index {index} out of range for {} observations",
                self.dataset.len()
            )));
        }
        self.hover.on_point_enter(index);
        Ok(())
    }

    /// Hover by region abbreviation; returns `false` when unknown.
    pub fn point_enter_abbr(&mut self, abbr: &str) -> bool {
        match self.dataset.index_of_abbr(abbr) {
            Some(index) => {
                self.hover.on_point_enter(index);
                true
            }
            None => false,
        }
    }

    pub fn point_leave(&mut self) {
        self.hover.on_point_leave();
    }

    /// Tooltip content for the hovered point, built from the current
    /// selection. `None` while nothing is hovered.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipContent> {
        let index = self.hover.hovered_index()?;
        let observation = self.dataset.get(index)?;
        Some(TooltipContent::for_observation(observation, self.selection))
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let placements = self.current_placements();
        let inputs = FrameInputs {
            viewport: self.config.viewport,
            plot: self.plot,
            style: &self.style,
            dataset: &self.dataset,
            selection: self.selection,
            hover: self.hover,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            placements: &placements,
        };
        let frame = build_frame(&inputs)?;
        self.renderer.render(&frame)
    }

    /// Builds the current frame without invoking the renderer.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let placements = self.current_placements();
        let inputs = FrameInputs {
            viewport: self.config.viewport,
            plot: self.plot,
            style: &self.style,
            dataset: &self.dataset,
            selection: self.selection,
            hover: self.hover,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            placements: &placements,
        };
        build_frame(&inputs)
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.config.transition_millis)
    }
}
