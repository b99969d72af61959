use crate::render::Color;

/// Visual styling applied by the frame builder.
///
/// Defaults reproduce the original chart's stylesheet: translucent steel-blue
/// state circles with white bold-ish abbreviations, greyed-out inactive axis
/// labels, and a dark tooltip card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub marker_radius: f64,
    pub marker_fill: Color,
    pub marker_stroke: Color,
    pub abbr_font_size_px: f64,
    pub abbr_color: Color,

    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    pub tick_font_size_px: f64,
    pub tick_label_color: Color,

    pub axis_label_font_size_px: f64,
    pub active_label_color: Color,
    pub inactive_label_color: Color,

    pub tooltip_fill: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_line_height_px: f64,
    pub tooltip_padding_px: f64,
    /// Tooltip card offset from the hovered point, in canvas pixels.
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_radius: 12.0,
            marker_fill: Color::rgba(0.537, 0.741, 0.827, 0.8),
            marker_stroke: Color::rgb(0.890, 0.890, 0.890),
            abbr_font_size_px: 12.0,
            abbr_color: Color::rgb(1.0, 1.0, 1.0),

            axis_color: Color::rgb(0.2, 0.2, 0.2),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            tick_font_size_px: 11.0,
            tick_label_color: Color::rgb(0.2, 0.2, 0.2),

            axis_label_font_size_px: 16.0,
            active_label_color: Color::rgb(0.0, 0.0, 0.0),
            inactive_label_color: Color::rgb(0.788, 0.788, 0.788),

            tooltip_fill: Color::rgba(0.1, 0.1, 0.1, 0.9),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_line_height_px: 16.0,
            tooltip_padding_px: 8.0,
            tooltip_offset_x: -60.0,
            tooltip_offset_y: 80.0,
        }
    }
}
