//! SVG rendering backend.
//!
//! Serializes a materialized `RenderFrame` into a standalone SVG document.
//! The renderer keeps only the most recent document; hosts driving an
//! animation re-render per frame and read back `document()`.

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent `render` call.
    ///
    /// Empty until the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">",
            frame.viewport.width, frame.viewport.height, frame.viewport.width, frame.viewport.height
        );

        for line in &frame.lines {
            let _ = writeln!(
                svg,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                fmt_px(line.x1),
                fmt_px(line.y1),
                fmt_px(line.x2),
                fmt_px(line.y2),
                css_color(line.color),
                fmt_px(line.stroke_width)
            );
        }

        for rect in &frame.rects {
            let _ = writeln!(
                svg,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                fmt_px(rect.x),
                fmt_px(rect.y),
                fmt_px(rect.width),
                fmt_px(rect.height),
                css_color(rect.fill)
            );
        }

        for circle in &frame.circles {
            let stroke = match circle.stroke {
                Some(stroke) => format!(" stroke=\"{}\"", css_color(stroke)),
                None => String::new(),
            };
            let _ = writeln!(
                svg,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{stroke}/>",
                fmt_px(circle.cx),
                fmt_px(circle.cy),
                fmt_px(circle.radius),
                css_color(circle.fill)
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let rotation = if text.rotation_deg == 0.0 {
                String::new()
            } else {
                format!(
                    " transform=\"rotate({} {} {})\"",
                    fmt_px(text.rotation_deg),
                    fmt_px(text.x),
                    fmt_px(text.y)
                )
            };
            let _ = writeln!(
                svg,
                "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"{rotation}>{}</text>",
                fmt_px(text.x),
                fmt_px(text.y),
                fmt_px(text.font_size_px),
                css_color(text.color),
                escape_text(&text.text)
            );
        }

        svg.push_str("</svg>\n");
        self.document = svg;
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    let red = (color.red * 255.0).round() as u8;
    let green = (color.green * 255.0).round() as u8;
    let blue = (color.blue * 255.0).round() as u8;
    if (color.alpha - 1.0).abs() < 1e-9 {
        format!("rgb({red},{green},{blue})")
    } else {
        format!("rgba({red},{green},{blue},{})", fmt_px(color.alpha))
    }
}

/// Trims trailing zeros so coordinates stay readable in the markup.
fn fmt_px(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
