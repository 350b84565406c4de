use tracing::{debug, info};

use crate::core::{AgendaDocument, ChartLayout, Viewport, flatten_with_row_height};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{build_chart_frame, build_message_frame};
use super::{AgendaChartConfig, ChartScales, LayoutSnapshot};

/// Agenda chart bound to one drawing surface.
///
/// Flattening and scale mapping are pure; only `render` and
/// `render_message` touch the renderer.
pub struct AgendaChart<R: Renderer> {
    renderer: R,
    config: AgendaChartConfig,
}

impl<R: Renderer> AgendaChart<R> {
    /// Validates `config` and hands its root css class, if any, to `renderer`.
    pub fn new(mut renderer: R, config: AgendaChartConfig) -> ChartResult<Self> {
        config.validate()?;
        if let Some(class) = &config.css_class {
            renderer.set_root_class(class);
        }
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &AgendaChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Flattens `agenda` with the row height of the configured metrics.
    #[must_use]
    pub fn layout<'a>(&self, agenda: &'a AgendaDocument) -> ChartLayout<'a> {
        flatten_with_row_height(agenda, self.config.row_height())
    }

    pub fn scales(&self, layout: &ChartLayout<'_>) -> ChartResult<ChartScales> {
        ChartScales::from_layout(
            layout,
            self.config.metrics,
            self.config.chart_width(),
            self.config.band_padding,
        )
    }

    pub fn build_render_frame(&self, agenda: &AgendaDocument) -> ChartResult<RenderFrame> {
        let layout = self.layout(agenda);
        let scales = self.scales(&layout)?;
        Ok(build_chart_frame(&layout, &scales, &self.config))
    }

    #[must_use]
    pub fn snapshot(&self, agenda: &AgendaDocument) -> LayoutSnapshot {
        LayoutSnapshot::from(&self.layout(agenda))
    }

    /// Clears the surface and draws the chart for `agenda`.
    ///
    /// Returns the size of the drawn canvas.
    pub fn render(&mut self, agenda: &AgendaDocument) -> ChartResult<Viewport> {
        self.renderer.clear();
        let frame = self.build_render_frame(agenda)?;
        self.renderer.render(&frame)?;
        info!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            bars = frame.rects.len(),
            "rendered agenda chart"
        );
        Ok(frame.viewport)
    }

    /// Clears the surface and draws `message` as inline text.
    pub fn render_message(&mut self, message: &str) -> ChartResult<Viewport> {
        self.renderer.clear();
        let frame = build_message_frame(message, &self.config);
        self.renderer.render(&frame)?;
        debug!(text = message, "rendered inline message");
        Ok(frame.viewport)
    }
}
