use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_image_count: usize,
    pub render_count: usize,
    pub clear_count: usize,
    pub root_class: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_image_count = frame.images.len();
        self.render_count += 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.last_line_count = 0;
        self.last_rect_count = 0;
        self.last_text_count = 0;
        self.last_image_count = 0;
        self.clear_count += 1;
    }

    fn set_root_class(&mut self, class: &str) {
        self.root_class = Some(class.to_owned());
    }
}
