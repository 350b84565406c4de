use std::fmt::Write as _;
use std::path::Path;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

const DEFAULT_STYLE: &str = "\
.bar{fill-opacity:0.9}\
.bar.hot{fill:#d7301f}\
.bar.warm{fill:#fc8d59}\
.bar.cold{fill:#4575b4}\
.axis text{font-family:sans-serif}\
.label{font-family:sans-serif}\
.message{font-family:sans-serif}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub images_drawn: usize,
}

/// Renderer that owns an SVG document as its drawing surface.
///
/// Every `render` call discards the previous document and serializes the
/// frame from scratch.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    document: String,
    css_class: Option<String>,
    background: Option<Color>,
    embed_style: bool,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            embed_style: true,
            ..Self::default()
        }
    }

    /// Class attribute placed on the root `<svg>` element.
    #[must_use]
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    pub fn with_background(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.background = Some(color);
        Ok(self)
    }

    /// Controls the embedded `<style>` block with heat-class colours.
    #[must_use]
    pub fn with_embedded_style(mut self, embed: bool) -> Self {
        self.embed_style = embed;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Current document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        std::fs::write(path, self.document.as_bytes())?;
        Ok(())
    }

    fn write_document(&self, out: &mut String, frame: &RenderFrame) -> SvgRenderStats {
        let width = f64::from(frame.viewport.width);
        let height = f64::from(frame.viewport.height);
        let mut stats = SvgRenderStats::default();

        out.push_str("<svg xmlns=\"");
        out.push_str(SVG_NS);
        out.push_str("\" xmlns:xlink=\"");
        out.push_str(XLINK_NS);
        out.push_str("\" width=\"");
        fmt_into(out, width);
        out.push_str("\" height=\"");
        fmt_into(out, height);
        out.push_str("\" viewBox=\"0 0 ");
        fmt_into(out, width);
        out.push(' ');
        fmt_into(out, height);
        out.push('"');
        if let Some(class) = self.css_class.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(" class=\"");
            escape_xml_into(out, class);
            out.push('"');
        }
        out.push('>');

        if self.embed_style {
            out.push_str("<style>");
            out.push_str(DEFAULT_STYLE);
            out.push_str("</style>");
        }

        if let Some(background) = self.background {
            out.push_str("<rect class=\"background\" x=\"0\" y=\"0\" width=\"");
            fmt_into(out, width);
            out.push_str("\" height=\"");
            fmt_into(out, height);
            out.push('"');
            push_fill(out, background);
            out.push_str("/>");
        }

        for line in &frame.lines {
            out.push_str("<line x1=\"");
            fmt_into(out, line.x1);
            out.push_str("\" y1=\"");
            fmt_into(out, line.y1);
            out.push_str("\" x2=\"");
            fmt_into(out, line.x2);
            out.push_str("\" y2=\"");
            fmt_into(out, line.y2);
            out.push_str("\" stroke=\"");
            out.push_str(&line.color.to_css_rgb());
            out.push_str("\" stroke-width=\"");
            fmt_into(out, line.stroke_width);
            out.push('"');
            if line.color.alpha < 1.0 {
                out.push_str(" stroke-opacity=\"");
                fmt_into(out, line.color.alpha);
                out.push('"');
            }
            out.push_str("/>");
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            out.push_str("<rect");
            push_class(out, &rect.class);
            out.push_str(" x=\"");
            fmt_into(out, rect.x);
            out.push_str("\" y=\"");
            fmt_into(out, rect.y);
            out.push_str("\" width=\"");
            fmt_into(out, rect.width);
            out.push_str("\" height=\"");
            fmt_into(out, rect.height);
            out.push('"');
            push_fill(out, rect.fill_color);
            out.push_str("/>");
            stats.rects_drawn += 1;
        }

        for image in &frame.images {
            out.push_str("<image");
            push_class(out, &image.class);
            out.push_str(" href=\"");
            escape_xml_into(out, &image.href);
            out.push_str("\" x=\"");
            fmt_into(out, image.x);
            out.push_str("\" y=\"");
            fmt_into(out, image.y);
            out.push_str("\" width=\"");
            fmt_into(out, image.width);
            out.push_str("\" height=\"");
            fmt_into(out, image.height);
            out.push_str("\" preserveAspectRatio=\"xMidYMid slice\"");
            if image.title.is_empty() {
                out.push_str("/>");
            } else {
                out.push_str("><title>");
                escape_xml_into(out, &image.title);
                out.push_str("</title></image>");
            }
            stats.images_drawn += 1;
        }

        for text in &frame.texts {
            out.push_str("<text");
            push_class(out, &text.class);
            out.push_str(" x=\"");
            fmt_into(out, text.x);
            out.push_str("\" y=\"");
            fmt_into(out, text.y);
            out.push_str("\" font-size=\"");
            fmt_into(out, text.font_size_px);
            out.push_str("\" text-anchor=\"");
            out.push_str(match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            });
            out.push('"');
            push_fill(out, text.color);
            out.push('>');
            if let Some(full_text) = &text.full_text {
                out.push_str("<title>");
                escape_xml_into(out, full_text);
                out.push_str("</title>");
            }
            escape_xml_into(out, &text.text);
            out.push_str("</text>");
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::with_capacity(256 + 160 * (frame.rects.len() + frame.texts.len()));
        let stats = self.write_document(&mut out, frame);
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }

    fn clear(&mut self) {
        self.document.clear();
        self.last_stats = SvgRenderStats::default();
    }

    fn set_root_class(&mut self, class: &str) {
        self.css_class = Some(class.to_owned());
    }
}

fn push_class(out: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    out.push_str(" class=\"");
    escape_xml_into(out, class);
    out.push('"');
}

fn push_fill(out: &mut String, color: Color) {
    out.push_str(" fill=\"");
    out.push_str(&color.to_css_rgb());
    out.push('"');
    if color.alpha < 1.0 {
        out.push_str(" fill-opacity=\"");
        fmt_into(out, color.alpha);
        out.push('"');
    }
}

// Round-trippable decimal form without `-0` or float noise from layout math.
fn fmt_into(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }

    let _ = write!(out, "{v}");
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}
