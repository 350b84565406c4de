pub mod agenda;
pub mod band_scale;
pub mod flatten;
pub mod heat;
pub mod metric;
pub mod scale;
pub mod ticks;
pub mod types;

pub use agenda::{AgendaDocument, Author, Contents, Day, Feedback, Slot, Talk, Track};
pub use band_scale::BandScale;
pub use flatten::{
    ChartLayout, DEFAULT_ROW_HEIGHT, RowMetrics, SlotRecord, create_label, flatten,
    flatten_with_row_height,
};
pub use heat::HeatClass;
pub use metric::{Metric, MetricSelection};
pub use scale::LinearScale;
pub use ticks::{tick_step, ticks};
pub use types::{Margins, Viewport};
