use serde::{Deserialize, Serialize};

/// Qualitative colour band of a bar relative to the displayed axis maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatClass {
    Hot,
    Warm,
    Cold,
    #[default]
    Neutral,
}

impl HeatClass {
    pub const HOT_FRACTION: f64 = 0.8;
    pub const WARM_FRACTION: f64 = 0.6;
    pub const COLD_FRACTION: f64 = 0.2;

    /// Classifies `value` against fractions of `axis_max`.
    ///
    /// Thresholds are strict and checked hot, warm, cold in that order, so an
    /// all-zero dataset stays neutral.
    #[must_use]
    pub fn classify(value: f64, axis_max: f64) -> Self {
        if value > axis_max * Self::HOT_FRACTION {
            Self::Hot
        } else if value > axis_max * Self::WARM_FRACTION {
            Self::Warm
        } else if value < axis_max * Self::COLD_FRACTION {
            Self::Cold
        } else {
            Self::Neutral
        }
    }

    /// CSS class name, empty for neutral bars.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Neutral => "",
        }
    }
}
