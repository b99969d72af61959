use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::metric::{XMetric, YMetric};
use crate::core::observation::Observation;
use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Multiplicative domain padding for the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XDomainTuning {
    /// Factor applied to the minimum metric value.
    pub min_ratio: f64,
    /// Factor applied to the maximum metric value.
    pub max_ratio: f64,
}

impl Default for XDomainTuning {
    fn default() -> Self {
        Self {
            min_ratio: 0.8,
            max_ratio: 1.2,
        }
    }
}

/// Multiplicative domain padding for the vertical axis.
///
/// The minimum is pinned at zero; only the maximum is padded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YDomainTuning {
    pub max_ratio: f64,
}

impl Default for YDomainTuning {
    fn default() -> Self {
        Self { max_ratio: 1.1 }
    }
}

/// Linear value-to-pixel mapping with an explicit pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical axis maps larger values to smaller pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Scale over the active X metric: domain `[min * min_ratio, max * max_ratio]`,
    /// range `[0, plot width]`.
    pub fn x_from_observations(
        observations: &[Observation],
        metric: XMetric,
        plot: PlotArea,
    ) -> ChartResult<Self> {
        Self::x_from_observations_tuned(observations, metric, plot, XDomainTuning::default())
    }

    pub fn x_from_observations_tuned(
        observations: &[Observation],
        metric: XMetric,
        plot: PlotArea,
        tuning: XDomainTuning,
    ) -> ChartResult<Self> {
        let (min, max) = metric_extent(observations, |observation| observation.x_value(metric))?;
        Self::new(min * tuning.min_ratio, max * tuning.max_ratio, 0.0, plot.width)
    }

    /// Scale over the active Y metric: domain `[0, max * max_ratio]`, inverted
    /// range `[plot height, 0]`.
    pub fn y_from_observations(
        observations: &[Observation],
        metric: YMetric,
        plot: PlotArea,
    ) -> ChartResult<Self> {
        Self::y_from_observations_tuned(observations, metric, plot, YDomainTuning::default())
    }

    pub fn y_from_observations_tuned(
        observations: &[Observation],
        metric: YMetric,
        plot: PlotArea,
        tuning: YDomainTuning,
    ) -> ChartResult<Self> {
        let (_, max) = metric_extent(observations, |observation| observation.y_value(metric))?;
        Self::new(0.0, max * tuning.max_ratio, plot.height, 0.0)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn metric_extent(
    observations: &[Observation],
    value_of: impl Fn(&Observation) -> f64,
) -> ChartResult<(f64, f64)> {
    if observations.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let min = observations
        .iter()
        .map(|observation| OrderedFloat(value_of(observation)))
        .min()
        .map(OrderedFloat::into_inner)
        .unwrap_or(f64::NAN);
    let max = observations
        .iter()
        .map(|observation| OrderedFloat(value_of(observation)))
        .max()
        .map(OrderedFloat::into_inner)
        .unwrap_or(f64::NAN);

    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "metric extent must be finite".to_owned(),
        ));
    }

    Ok((min, max))
}
