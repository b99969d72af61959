use serde::Deserialize;

use crate::core::metric::{XMetric, YMetric};
use crate::error::{ChartError, ChartResult};

/// One region's record: identity plus the six selectable metrics.
///
/// Deserialized straight from the dataset CSV; columns not named here
/// (margins of error, `single`, ...) are ignored by the reader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub id: u32,
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl Observation {
    #[must_use]
    pub fn x_value(&self, metric: XMetric) -> f64 {
        match metric {
            XMetric::Poverty => self.poverty,
            XMetric::Age => self.age,
            XMetric::Income => self.income,
        }
    }

    #[must_use]
    pub fn y_value(&self, metric: YMetric) -> f64 {
        match metric {
            YMetric::Healthcare => self.healthcare,
            YMetric::Smokes => self.smokes,
            YMetric::Obesity => self.obesity,
        }
    }

    /// Load-time invariant: every metric field parsed to a finite number.
    pub fn validate(&self) -> ChartResult<()> {
        for (column, value) in [
            ("poverty", self.poverty),
            ("age", self.age),
            ("income", self.income),
            ("healthcare", self.healthcare),
            ("smokes", self.smokes),
            ("obesity", self.obesity),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "observation `{}` has non-finite `{column}` value",
                    self.abbr
                )));
            }
        }
        if self.abbr.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "observation id={} has empty `abbr`",
                self.id
            )));
        }
        Ok(())
    }
}
