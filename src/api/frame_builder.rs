//! Materializes the full chart scene into a `RenderFrame`.
//!
//! The builder is pure: it reads engine state and emits primitives in
//! absolute canvas coordinates. Scales and placements stay plot-local until
//! this step.

use crate::core::ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX,
    format_tick, nice_step, nice_ticks, tick_target_count,
};
use crate::core::types::PlotArea;
use crate::core::{LinearScale, PointPlacement, Viewport};
use crate::dataset::Dataset;
use crate::error::ChartResult;
use crate::interaction::{AxisSelection, HoverState, LabelEmphasis};
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_labels::{x_label_placements, y_label_placements};
use super::render_style::RenderStyle;
use super::tooltip::TooltipContent;

pub(super) struct FrameInputs<'a> {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub style: &'a RenderStyle,
    pub dataset: &'a Dataset,
    pub selection: AxisSelection,
    pub hover: HoverState,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub placements: &'a [PointPlacement],
}

pub(super) fn build_frame(inputs: &FrameInputs<'_>) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(inputs.viewport);

    push_axes(&mut frame, inputs)?;
    push_points(&mut frame, inputs);
    push_axis_labels(&mut frame, inputs);
    push_tooltip(&mut frame, inputs);

    Ok(frame)
}

fn push_axes(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) -> ChartResult<()> {
    let style = inputs.style;
    let plot = inputs.plot;
    let bottom = plot.origin_y + plot.height;
    let right = plot.origin_x + plot.width;

    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        bottom,
        right,
        bottom,
        style.axis_stroke_width,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        plot.origin_y,
        plot.origin_x,
        bottom,
        style.axis_stroke_width,
        style.axis_color,
    ));

    let x_count = tick_target_count(
        plot.width,
        AXIS_X_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let x_domain = inputs.x_scale.domain();
    let x_step = nice_step((x_domain.1 - x_domain.0).abs() / x_count.max(1) as f64);
    for tick in nice_ticks(x_domain, x_count) {
        let local_x = inputs.x_scale.value_to_pixel(tick)?;
        let x = plot.origin_x + local_x;
        frame.lines.push(LinePrimitive::new(
            x,
            bottom,
            x,
            bottom + style.tick_length_px,
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, x_step),
            x,
            bottom + style.tick_length_px + style.tick_font_size_px + 2.0,
            style.tick_font_size_px,
            style.tick_label_color,
            TextHAlign::Center,
        ));
    }

    let y_count = tick_target_count(
        plot.height,
        AXIS_Y_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    let y_domain = inputs.y_scale.domain();
    let y_step = nice_step((y_domain.1 - y_domain.0).abs() / y_count.max(1) as f64);
    for tick in nice_ticks(y_domain, y_count) {
        let local_y = inputs.y_scale.value_to_pixel(tick)?;
        let y = plot.origin_y + local_y;
        frame.lines.push(LinePrimitive::new(
            plot.origin_x - style.tick_length_px,
            y,
            plot.origin_x,
            y,
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, y_step),
            plot.origin_x - style.tick_length_px - 3.0,
            y + style.tick_font_size_px * 0.35,
            style.tick_font_size_px,
            style.tick_label_color,
            TextHAlign::Right,
        ));
    }

    Ok(())
}

fn push_points(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let style = inputs.style;
    for (placement, observation) in inputs
        .placements
        .iter()
        .zip(inputs.dataset.observations())
    {
        let (cx, cy) = inputs.plot.to_canvas(placement.x, placement.y);
        frame.circles.push(
            CirclePrimitive::new(cx, cy, style.marker_radius, style.marker_fill)
                .with_stroke(style.marker_stroke),
        );

        let (label_x, label_y) = inputs
            .plot
            .to_canvas(placement.x, placement.abbr_baseline_y());
        frame.texts.push(TextPrimitive::new(
            observation.abbr.clone(),
            label_x,
            label_y,
            style.abbr_font_size_px,
            style.abbr_color,
            TextHAlign::Center,
        ));
    }
}

fn push_axis_labels(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let style = inputs.style;

    for placement in x_label_placements(inputs.plot, inputs.selection) {
        frame.texts.push(TextPrimitive::new(
            placement.metric.axis_label(),
            placement.x,
            placement.y,
            style.axis_label_font_size_px,
            emphasis_color(style, placement.emphasis),
            TextHAlign::Center,
        ));
    }

    for placement in y_label_placements(inputs.plot, inputs.selection) {
        frame.texts.push(
            TextPrimitive::new(
                placement.metric.axis_label(),
                placement.x,
                placement.y,
                style.axis_label_font_size_px,
                emphasis_color(style, placement.emphasis),
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
    }
}

fn push_tooltip(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let Some(index) = inputs.hover.hovered_index() else {
        return;
    };
    let (Some(observation), Some(placement)) =
        (inputs.dataset.get(index), inputs.placements.get(index))
    else {
        return;
    };

    let style = inputs.style;
    let content = TooltipContent::for_observation(observation, inputs.selection);
    let lines = content.lines();

    // Monospace-free width estimate; generous enough for the card background.
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let card_width = longest * style.tooltip_font_size_px * 0.62 + style.tooltip_padding_px * 2.0;
    let card_height =
        style.tooltip_line_height_px * lines.len() as f64 + style.tooltip_padding_px * 2.0;

    let (anchor_x, anchor_y) = inputs.plot.to_canvas(placement.x, placement.y);
    let card_x = anchor_x + style.tooltip_offset_x;
    let card_y = anchor_y + style.tooltip_offset_y;

    frame.rects.push(RectPrimitive::new(
        card_x,
        card_y,
        card_width.max(1.0),
        card_height,
        style.tooltip_fill,
    ));

    for (row, line) in lines.iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            *line,
            card_x + style.tooltip_padding_px,
            card_y
                + style.tooltip_padding_px
                + style.tooltip_line_height_px * (row + 1) as f64
                - 4.0,
            style.tooltip_font_size_px,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
    }
}

fn emphasis_color(style: &RenderStyle, emphasis: LabelEmphasis) -> crate::render::Color {
    match emphasis {
        LabelEmphasis::Active => style.active_label_color,
        LabelEmphasis::Inactive => style.inactive_label_color,
    }
}
