//! Renders one SVG snapshot of the scatter chart from a CSV dataset.
//!
//! Usage: `svg_snapshot_tool [CSV_PATH] [OUT_PATH]`
//! Defaults: `assets/data/census.csv` -> `target/census_scatter.svg`.

use std::env;
use std::fs;
use std::process::ExitCode;

use scatter_rs::api::{ChartEngine, ChartEngineConfig};
use scatter_rs::render::SvgRenderer;

const DEFAULT_CSV_PATH: &str = "assets/data/census.csv";
const DEFAULT_OUT_PATH: &str = "target/census_scatter.svg";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let csv_path = args.get(1).map_or(DEFAULT_CSV_PATH, String::as_str);
    let out_path = args.get(2).map_or(DEFAULT_OUT_PATH, String::as_str);

    let config = ChartEngineConfig::default();
    let mut engine =
        match ChartEngine::from_csv_path(SvgRenderer::new(), config, csv_path) {
            Ok(engine) => engine,
            Err(error) => {
                eprintln!("failed to load dataset from {csv_path}: {error}");
                return ExitCode::FAILURE;
            }
        };

    if let Err(error) = engine.render() {
        eprintln!("render failed: {error}");
        return ExitCode::FAILURE;
    }

    let document = engine.into_renderer().into_document();
    if let Err(error) = fs::write(out_path, document) {
        eprintln!("failed to write {out_path}: {error}");
        return ExitCode::FAILURE;
    }

    println!("wrote {out_path}");
    ExitCode::SUCCESS
}
