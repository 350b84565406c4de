use serde::{Deserialize, Serialize};

use crate::core::{Margins, MetricSelection, RowMetrics};
use crate::error::{ChartError, ChartResult};

/// Construction-time settings of an `AgendaChart`.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaChartConfig {
    /// Plot width in pixels; the bar for the metric maximum spans it.
    pub width: u32,
    pub row_metrics: RowMetrics,
    pub margins: Margins,
    pub metrics: MetricSelection,
    /// Maximum row label width before truncation. Defaults to `width`.
    pub label_width: Option<f64>,
    pub font_size_px: f64,
    pub axis_font_size_px: f64,
    /// Fraction of a band step left empty between rows.
    pub band_padding: f64,
    pub tick_count: usize,
    /// Class attribute for the root element of the drawing surface.
    pub css_class: Option<String>,
}

impl AgendaChartConfig {
    pub const DEFAULT_WIDTH: u32 = 600;

    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.row_metrics.bar_height = bar_height;
        self
    }

    #[must_use]
    pub fn with_row_metrics(mut self, row_metrics: RowMetrics) -> Self {
        self.row_metrics = row_metrics;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricSelection) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_label_width(mut self, label_width: f64) -> Self {
        self.label_width = Some(label_width);
        self
    }

    #[must_use]
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn effective_label_width(&self) -> f64 {
        self.label_width.unwrap_or_else(|| self.chart_width())
    }

    /// Height of one row for the selected metrics.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.row_metrics.row_height(self.metrics.count())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 {
            return Err(ChartError::InvalidConfig("width must be > 0".to_owned()));
        }
        let RowMetrics {
            label_height,
            bar_height,
            row_margin,
        } = self.row_metrics;
        for (name, value) in [
            ("label_height", label_height),
            ("bar_height", bar_height),
            ("row_margin", row_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if label_height + bar_height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "row content height must be > 0".to_owned(),
            ));
        }
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidConfig(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self
            .label_width
            .is_some_and(|width| !width.is_finite() || width <= 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "label width must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("axis_font_size_px", self.axis_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.band_padding.is_finite() || !(0.0..=1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidConfig(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for AgendaChartConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            row_metrics: RowMetrics::default(),
            margins: Margins::default(),
            metrics: MetricSelection::default(),
            label_width: None,
            font_size_px: 12.0,
            axis_font_size_px: 10.0,
            band_padding: 0.1,
            tick_count: 4,
            css_class: None,
        }
    }
}
