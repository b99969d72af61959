use serde::{Deserialize, Serialize};

use crate::core::scale::{XDomainTuning, YDomainTuning};
use crate::core::transition::DEFAULT_TRANSITION_DURATION;
use crate::core::{Margins, Viewport, XMetric, YMetric};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_initial_x")]
    pub initial_x: XMetric,
    #[serde(default = "default_initial_y")]
    pub initial_y: YMetric,
    #[serde(default = "default_transition_millis")]
    pub transition_millis: u64,
    #[serde(default)]
    pub x_domain_tuning: XDomainTuning,
    #[serde(default)]
    pub y_domain_tuning: YDomainTuning,
}

impl ChartEngineConfig {
    /// Creates a config with the canonical 960x500 canvas and default margins.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            initial_x: default_initial_x(),
            initial_y: default_initial_y(),
            transition_millis: default_transition_millis(),
            x_domain_tuning: XDomainTuning::default(),
            y_domain_tuning: YDomainTuning::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_initial_metrics(mut self, initial_x: XMetric, initial_y: YMetric) -> Self {
        self.initial_x = initial_x;
        self.initial_y = initial_y;
        self
    }

    #[must_use]
    pub fn with_transition_millis(mut self, transition_millis: u64) -> Self {
        self.transition_millis = transition_millis;
        self
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|error| ChartError::InvalidData(format!("config serialization: {error}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|error| ChartError::InvalidData(format!("config deserialization: {error}")))
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(960, 500))
    }
}

fn default_initial_x() -> XMetric {
    XMetric::Poverty
}

fn default_initial_y() -> YMetric {
    YMetric::Healthcare
}

fn default_transition_millis() -> u64 {
    DEFAULT_TRANSITION_DURATION.as_millis() as u64
}
