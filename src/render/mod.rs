mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, ImagePrimitive, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and
/// replace whatever they drew before, so drawing code stays isolated from
/// agenda flattening and scale mapping.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Drops any previous drawing from the surface.
    fn clear(&mut self) {}

    /// Class the backend attaches to its root element, where it has one.
    fn set_root_class(&mut self, _class: &str) {}
}
