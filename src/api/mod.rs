mod chart_config;
mod chart_engine;
mod chart_scales;
mod frame_builder;
mod label_fit;
mod snapshot;

pub use chart_config::AgendaChartConfig;
pub use chart_engine::AgendaChart;
pub use chart_scales::{ChartScales, MetricScale};
pub use frame_builder::{canvas_viewport, heat_color};
pub use label_fit::{ELLIPSIS, estimate_text_width_px, truncate_to_width};
pub use snapshot::{
    LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1, RecordSnapshot,
};
