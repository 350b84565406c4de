use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, SlotRecord};
use crate::error::{ChartError, ChartResult};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Owned, serializable copy of a `ChartLayout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub max_likes: u64,
    pub max_feedback: u64,
    pub row_height: f64,
    pub total_height: f64,
    pub labels: Vec<String>,
    pub records: Vec<RecordSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub label: String,
    pub day_name: String,
    pub start: String,
    pub track_name: String,
    pub title: String,
    pub likes: u64,
    pub feedback_count: u64,
    pub author_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl From<&SlotRecord<'_>> for RecordSnapshot {
    fn from(record: &SlotRecord<'_>) -> Self {
        Self {
            label: record.label.clone(),
            day_name: record.day_name.to_owned(),
            start: record.start.to_owned(),
            track_name: record.track_name.to_owned(),
            title: record.title.to_owned(),
            likes: record.likes,
            feedback_count: record.feedback_count,
            author_names: record.authors.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

impl From<&ChartLayout<'_>> for LayoutSnapshot {
    fn from(layout: &ChartLayout<'_>) -> Self {
        Self {
            max_likes: layout.max_likes,
            max_feedback: layout.max_feedback,
            row_height: layout.row_height,
            total_height: layout.total_height,
            labels: layout.labels.clone(),
            records: layout.records.iter().map(RecordSnapshot::from).collect(),
        }
    }
}

impl LayoutSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
