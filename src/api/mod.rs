mod axis_labels;
mod engine;
mod engine_config;
mod frame_builder;
mod render_style;
mod tooltip;

pub use axis_labels::{XLabelPlacement, YLabelPlacement, x_label_placements, y_label_placements};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use render_style::RenderStyle;
pub use tooltip::TooltipContent;
