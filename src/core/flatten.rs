use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::agenda::{AgendaDocument, Author};

/// Vertical footprint of one chart row: a label line, one bar per shown
/// metric and a trailing margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowMetrics {
    pub label_height: f64,
    pub bar_height: f64,
    pub row_margin: f64,
}

impl RowMetrics {
    pub const DEFAULT_LABEL_HEIGHT: f64 = 16.0;
    pub const DEFAULT_BAR_HEIGHT: f64 = 20.0;
    pub const DEFAULT_ROW_MARGIN: f64 = 8.0;

    #[must_use]
    pub const fn new(label_height: f64, bar_height: f64, row_margin: f64) -> Self {
        Self {
            label_height,
            bar_height,
            row_margin,
        }
    }

    #[must_use]
    pub fn row_height(self, metric_count: usize) -> f64 {
        self.label_height + metric_count as f64 * self.bar_height + self.row_margin
    }
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LABEL_HEIGHT,
            Self::DEFAULT_BAR_HEIGHT,
            Self::DEFAULT_ROW_MARGIN,
        )
    }
}

/// Row height used by `flatten`: label, likes bar, feedback bar and margin.
pub const DEFAULT_ROW_HEIGHT: f64 = RowMetrics::DEFAULT_LABEL_HEIGHT
    + 2.0 * RowMetrics::DEFAULT_BAR_HEIGHT
    + RowMetrics::DEFAULT_ROW_MARGIN;

/// One chartable talk, borrowing its text and authors from the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRecord<'a> {
    pub label: String,
    pub likes: u64,
    pub feedback_count: u64,
    pub authors: &'a [Author],
    pub track_name: &'a str,
    pub title: &'a str,
    pub day_name: &'a str,
    pub start: &'a str,
}

/// Flattened, label-sorted view of an agenda ready for scaling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout<'a> {
    pub max_likes: u64,
    pub max_feedback: u64,
    pub records: Vec<SlotRecord<'a>>,
    pub labels: Vec<String>,
    pub row_height: f64,
    pub total_height: f64,
}

impl ChartLayout<'_> {
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds the row key joining records to band positions.
#[must_use]
pub fn create_label(day_name: &str, start: &str, track_name: &str) -> String {
    format!("{day_name}-{start}-{track_name}")
}

/// Flattens `agenda` with the default dual-metric row height.
#[must_use]
pub fn flatten(agenda: &AgendaDocument) -> ChartLayout<'_> {
    flatten_with_row_height(agenda, DEFAULT_ROW_HEIGHT)
}

/// Walks days, tracks and slots in document order, keeps talks only, and
/// returns records and labels sorted by label in code-point order.
#[must_use]
pub fn flatten_with_row_height(agenda: &AgendaDocument, row_height: f64) -> ChartLayout<'_> {
    let mut max_likes: u64 = 0;
    let mut max_feedback: u64 = 0;
    let mut records = Vec::new();

    for (day, track, slot) in agenda.slots() {
        let Some(talk) = slot.talk() else {
            trace!(
                day = %day.name,
                track = %track.name,
                start = %slot.start,
                kind = slot.contents.as_ref().map_or("", |c| c.kind()),
                "skipping non-talk slot"
            );
            continue;
        };

        let feedback_count = talk.feedback_count();
        max_likes = max_likes.max(talk.total_likes);
        max_feedback = max_feedback.max(feedback_count);
        records.push(SlotRecord {
            label: create_label(&day.name, &slot.start, &track.name),
            likes: talk.total_likes,
            feedback_count,
            authors: &talk.authors,
            track_name: &track.name,
            title: &talk.title,
            day_name: &day.name,
            start: &slot.start,
        });
    }

    records.sort_by(|a, b| a.label.cmp(&b.label));
    let labels: Vec<String> = records.iter().map(|record| record.label.clone()).collect();
    let total_height = records.len() as f64 * row_height;

    debug!(
        records = records.len(),
        max_likes, max_feedback, total_height, "flattened agenda"
    );

    ChartLayout {
        max_likes,
        max_feedback,
        records,
        labels,
        row_height,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_day_start_and_track() {
        assert_eq!(
            create_label("24 november", "09:00", "Track 1"),
            "24 november-09:00-Track 1"
        );
    }

    #[test]
    fn default_row_height_covers_two_bars() {
        assert_eq!(RowMetrics::default().row_height(2), DEFAULT_ROW_HEIGHT);
    }
}
