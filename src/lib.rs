//! scatter-rs: interactive scatter-plot engine for per-state demographic data.
//!
//! This crate provides a Rust-idiomatic engine/renderer split for a single
//! interactive scatter chart: clickable axis-metric labels, padded linear
//! scales, animated reselect transitions, and hover tooltips, rendered
//! through a backend-agnostic frame (SVG backend included).

pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
