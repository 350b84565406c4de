//! agenda-chart: conference agenda popularity rendered as an SVG bar chart.
//!
//! The crate splits into a pure core (agenda decoding, flattening into
//! label-sorted records, scale mapping) and a rendering side that turns the
//! computed layout into backend-agnostic primitives consumed by a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod source;
pub mod telemetry;

pub use api::{AgendaChart, AgendaChartConfig};
pub use crate::core::{AgendaDocument, ChartLayout, SlotRecord, flatten};
pub use error::{ChartError, ChartResult};
pub use source::{AgendaSource, load_agenda};
