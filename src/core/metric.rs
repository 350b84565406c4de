use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::flatten::{ChartLayout, SlotRecord};
use crate::error::ChartError;

/// Popularity metric encoded as bar length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Likes,
    Feedback,
}

impl Metric {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Feedback => "feedback",
        }
    }

    #[must_use]
    pub fn value(self, record: &SlotRecord<'_>) -> u64 {
        match self {
            Self::Likes => record.likes,
            Self::Feedback => record.feedback_count,
        }
    }

    #[must_use]
    pub fn max(self, layout: &ChartLayout<'_>) -> u64 {
        match self {
            Self::Likes => layout.max_likes,
            Self::Feedback => layout.max_feedback,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which metrics get a bar per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricSelection {
    #[default]
    Both,
    Likes,
    Feedback,
}

impl MetricSelection {
    #[must_use]
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Both => &[Metric::Likes, Metric::Feedback],
            Self::Likes => &[Metric::Likes],
            Self::Feedback => &[Metric::Feedback],
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.metrics().len()
    }
}

impl FromStr for MetricSelection {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(Self::Both),
            "likes" => Ok(Self::Likes),
            "feedback" => Ok(Self::Feedback),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown metric `{other}`, expected `both`, `likes` or `feedback`"
            ))),
        }
    }
}
