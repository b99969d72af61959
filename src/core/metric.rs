use serde::{Deserialize, Serialize};

/// Metric keys selectable for the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XMetric {
    Poverty,
    Age,
    Income,
}

/// Metric keys selectable for the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YMetric {
    Healthcare,
    Smokes,
    Obesity,
}

impl XMetric {
    pub const ALL: [XMetric; 3] = [XMetric::Poverty, XMetric::Age, XMetric::Income];

    /// Stable key string matching the dataset column name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            XMetric::Poverty => "poverty",
            XMetric::Age => "age",
            XMetric::Income => "income",
        }
    }

    /// Human-readable axis label.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            XMetric::Poverty => "In Poverty (%)",
            XMetric::Age => "Age (Median)",
            XMetric::Income => "Household Income (Median)",
        }
    }

    /// Short label prefixing the metric value inside tooltips.
    #[must_use]
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            XMetric::Poverty => "Poverty:",
            XMetric::Age => "Age:",
            XMetric::Income => "Household Income:",
        }
    }
}

impl YMetric {
    pub const ALL: [YMetric; 3] = [YMetric::Healthcare, YMetric::Smokes, YMetric::Obesity];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            YMetric::Healthcare => "healthcare",
            YMetric::Smokes => "smokes",
            YMetric::Obesity => "obesity",
        }
    }

    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            YMetric::Healthcare => "Lacks Healthcare (%)",
            YMetric::Smokes => "Smokes (%)",
            YMetric::Obesity => "Obese (%)",
        }
    }

    #[must_use]
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            YMetric::Healthcare => "Healthcare:",
            YMetric::Smokes => "Smokes:",
            YMetric::Obesity => "Obese:",
        }
    }
}
