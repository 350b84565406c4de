use std::borrow::Cow;

use tracing::debug;

use crate::core::{ChartLayout, HeatClass, SlotRecord, Viewport};
use crate::render::{
    Color, ImagePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::label_fit::truncate_to_width;
use super::{AgendaChartConfig, ChartScales, MetricScale};

const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const LABEL_COLOR: Color = Color::rgb(0.13, 0.13, 0.13);
const MESSAGE_COLOR: Color = Color::rgb(0.7, 0.1, 0.1);
const TICK_LENGTH_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const AVATAR_GAP_PX: f64 = 2.0;
const LABEL_GAP_PX: f64 = 4.0;

#[must_use]
pub fn heat_color(heat: HeatClass) -> Color {
    match heat {
        HeatClass::Hot => Color::rgb(0.843, 0.188, 0.122),
        HeatClass::Warm => Color::rgb(0.988, 0.553, 0.349),
        HeatClass::Cold => Color::rgb(0.271, 0.459, 0.706),
        HeatClass::Neutral => Color::rgb(0.6, 0.6, 0.6),
    }
}

/// Canvas size fitting every row plus margins. Never collapses below 1x1 so
/// an empty agenda still yields a valid surface.
#[must_use]
pub fn canvas_viewport(config: &AgendaChartConfig, total_height: f64) -> Viewport {
    let width = config.chart_width() + config.margins.horizontal();
    let height = total_height + config.margins.vertical();
    Viewport::new(
        (width.ceil() as u32).max(1),
        (height.ceil() as u32).max(1),
    )
}

pub(super) fn build_chart_frame(
    layout: &ChartLayout<'_>,
    scales: &ChartScales,
    config: &AgendaChartConfig,
) -> RenderFrame {
    let plot_height = plot_height(layout, scales, config);
    let mut frame = RenderFrame::new(canvas_viewport(config, plot_height));

    for (axis_index, metric_scale) in scales.metrics.iter().enumerate() {
        push_value_axis(&mut frame, metric_scale, axis_index, plot_height, config);
    }

    let rows = &scales.rows;
    let bandwidth = rows.bandwidth();
    let content_height =
        config.row_metrics.label_height + scales.metrics.len() as f64 * config.row_metrics.bar_height;
    let fit = if content_height > 0.0 {
        bandwidth / content_height
    } else {
        0.0
    };
    let label_height = config.row_metrics.label_height * fit;
    let bar_height = config.row_metrics.bar_height * fit;

    for record in &layout.records {
        let Some(band_offset) = rows.position(&record.label) else {
            continue;
        };
        let row_top = config.margins.top + band_offset;

        push_row_label(&mut frame, record, row_top, label_height, config);

        for (bar_index, metric_scale) in scales.metrics.iter().enumerate() {
            let y = row_top + label_height + bar_index as f64 * bar_height;
            frame.rects.push(bar_rect(record, metric_scale, y, bar_height, config));
        }
    }

    debug!(
        width = frame.viewport.width,
        height = frame.viewport.height,
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        images = frame.images.len(),
        "built chart frame"
    );
    frame
}

// An empty layout has no rows to push the bottom axis away from the top one,
// so it borrows one row height.
fn plot_height(layout: &ChartLayout<'_>, scales: &ChartScales, config: &AgendaChartConfig) -> f64 {
    if layout.is_empty() && scales.metrics.len() > 1 {
        config.row_height()
    } else {
        layout.total_height
    }
}

pub(super) fn build_message_frame(message: &str, config: &AgendaChartConfig) -> RenderFrame {
    let line_height = config.font_size_px * 1.4;
    let lines: Vec<&str> = message.lines().filter(|line| !line.trim().is_empty()).collect();
    let lines = if lines.is_empty() { vec!["error"] } else { lines };
    let viewport = canvas_viewport(config, lines.len() as f64 * line_height);

    let mut frame = RenderFrame::new(viewport);
    for (index, line) in lines.into_iter().enumerate() {
        let baseline = config.margins.top + (index as f64 + 0.8) * line_height;
        frame.texts.push(
            TextPrimitive::new(
                line,
                config.margins.left,
                baseline,
                config.font_size_px,
                MESSAGE_COLOR,
                TextHAlign::Left,
            )
            .with_class("message"),
        );
    }
    frame
}

fn bar_rect(
    record: &SlotRecord<'_>,
    metric_scale: &MetricScale,
    y: f64,
    height: f64,
    config: &AgendaChartConfig,
) -> RectPrimitive {
    let value = metric_scale.metric.value(record) as f64;
    let heat = HeatClass::classify(value, metric_scale.axis_max);
    let width = metric_scale.scale.map(value).max(0.0);

    let mut class = format!("bar {}", metric_scale.metric.name());
    if heat != HeatClass::Neutral {
        class.push(' ');
        class.push_str(heat.css_class());
    }
    RectPrimitive::new(config.margins.left, y, width, height, heat_color(heat)).with_class(class)
}

fn push_row_label(
    frame: &mut RenderFrame,
    record: &SlotRecord<'_>,
    row_top: f64,
    label_height: f64,
    config: &AgendaChartConfig,
) {
    let left = config.margins.left;
    let mut avatar_strip = 0.0;
    if label_height > 0.0 {
        for author in record.authors.iter().filter(|a| !a.avatar.is_empty()) {
            frame.images.push(
                ImagePrimitive::new(
                    author.avatar.as_str(),
                    left + avatar_strip,
                    row_top,
                    label_height,
                    label_height,
                )
                .with_title(author.name.as_str())
                .with_class("avatar"),
            );
            avatar_strip += label_height + AVATAR_GAP_PX;
        }
    }
    if avatar_strip > 0.0 {
        avatar_strip += LABEL_GAP_PX - AVATAR_GAP_PX;
    }

    let text = format!("{}: {}", record.track_name, record.title);
    let max_width = (config.effective_label_width() - avatar_strip).max(0.0);
    let fitted = truncate_to_width(&text, max_width, config.font_size_px);
    let baseline = row_top + label_height * 0.8;
    let mut primitive = TextPrimitive::new(
        fitted.as_ref(),
        left + avatar_strip,
        baseline,
        config.font_size_px,
        LABEL_COLOR,
        TextHAlign::Left,
    )
    .with_class("label");
    if matches!(fitted, Cow::Owned(_)) {
        primitive = primitive.with_full_text(text.as_str());
    }
    frame.texts.push(primitive);
}

// The first metric gets the top axis, a second one the bottom axis.
fn push_value_axis(
    frame: &mut RenderFrame,
    metric_scale: &MetricScale,
    axis_index: usize,
    plot_height: f64,
    config: &AgendaChartConfig,
) {
    let left = config.margins.left;
    let (axis_y, direction) = if axis_index == 0 {
        (config.margins.top, -1.0)
    } else {
        (config.margins.top + plot_height, 1.0)
    };
    let class = format!("axis {}", metric_scale.metric.name());

    frame.lines.push(LinePrimitive::new(
        left,
        axis_y,
        left + config.chart_width(),
        axis_y,
        1.0,
        AXIS_COLOR,
    ));

    let font_size = config.axis_font_size_px;
    let label_y = if direction < 0.0 {
        axis_y - TICK_LENGTH_PX - TICK_LABEL_GAP_PX
    } else {
        axis_y + TICK_LENGTH_PX + TICK_LABEL_GAP_PX + font_size * 0.8
    };
    let ticks = if metric_scale.axis_max > 0.0 {
        metric_scale.scale.ticks(config.tick_count)
    } else {
        vec![0.0]
    };
    for tick in ticks {
        let x = left + metric_scale.scale.map(tick);
        frame.lines.push(LinePrimitive::new(
            x,
            axis_y,
            x,
            axis_y + direction * TICK_LENGTH_PX,
            1.0,
            AXIS_COLOR,
        ));
        frame.texts.push(
            TextPrimitive::new(
                format_tick(tick),
                x,
                label_y,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .with_class(class.as_str()),
        );
    }

    let name_y = if direction < 0.0 {
        label_y - font_size - 2.0
    } else {
        label_y + font_size + 2.0
    };
    frame.texts.push(
        TextPrimitive::new(
            metric_scale.metric.name(),
            left + config.chart_width(),
            name_y,
            font_size,
            AXIS_COLOR,
            TextHAlign::Right,
        )
        .with_class(format!("{class} title")),
    );
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
