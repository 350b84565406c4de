use crate::core::{BandScale, ChartLayout, LinearScale, Metric, MetricSelection};
use crate::error::ChartResult;

/// Horizontal scale of one rendered metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScale {
    pub metric: Metric,
    pub scale: LinearScale,
    /// Dataset maximum the heat thresholds are measured against.
    pub axis_max: f64,
}

/// Value scales for the shown metrics plus the row band scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub metrics: Vec<MetricScale>,
    pub rows: BandScale,
}

impl ChartScales {
    /// Maps each selected metric `[0, max]` onto `[0, width]` and the sorted
    /// labels onto `[0, layout.total_height]`.
    pub fn from_layout(
        layout: &ChartLayout<'_>,
        selection: MetricSelection,
        width: f64,
        band_padding: f64,
    ) -> ChartResult<Self> {
        let metrics = selection
            .metrics()
            .iter()
            .map(|&metric| -> ChartResult<MetricScale> {
                let max = metric.max(layout);
                Ok(MetricScale {
                    metric,
                    scale: LinearScale::for_metric(max, width)?,
                    axis_max: max as f64,
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;

        let rows = BandScale::new(layout.labels.iter().cloned(), 0.0, layout.total_height)?
            .with_padding(band_padding)?;

        Ok(Self { metrics, rows })
    }

    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<&MetricScale> {
        self.metrics.iter().find(|scale| scale.metric == metric)
    }
}
