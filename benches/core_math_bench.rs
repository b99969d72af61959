use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::api::{ChartEngine, ChartEngineConfig};
use scatter_rs::core::types::{Margins, PlotArea, Viewport};
use scatter_rs::core::{LinearScale, Observation, XMetric, YMetric, project_observations};
use scatter_rs::dataset::Dataset;
use scatter_rs::render::NullRenderer;
use std::hint::black_box;

fn synthetic_observations(count: usize) -> Vec<Observation> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Observation {
                id: i as u32 + 1,
                state: format!("State {i}"),
                abbr: format!("S{i}"),
                poverty: 8.0 + (t * 0.37) % 14.0,
                age: 30.0 + (t * 0.21) % 12.0,
                income: 40_000.0 + (t * 113.0) % 35_000.0,
                healthcare: 5.0 + (t * 0.29) % 15.0,
                smokes: 10.0 + (t * 0.17) % 16.0,
                obesity: 20.0 + (t * 0.23) % 17.0,
            }
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(8.0, 26.4, 0.0, 820.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(black_box(15.1)).expect("to pixel");
            let _ = scale.pixel_to_value(px).expect("from pixel");
        })
    });
}

fn bench_projection_10k(c: &mut Criterion) {
    let plot = PlotArea::from_viewport(Viewport::new(960, 500), Margins::default()).expect("plot");
    let observations = synthetic_observations(10_000);
    let x_scale = LinearScale::x_from_observations(&observations, XMetric::Poverty, plot)
        .expect("x scale");
    let y_scale = LinearScale::y_from_observations(&observations, YMetric::Healthcare, plot)
        .expect("y scale");

    c.bench_function("projection_10k", |b| {
        b.iter(|| {
            let _ = project_observations(
                black_box(&observations),
                black_box(XMetric::Poverty),
                black_box(YMetric::Healthcare),
                black_box(x_scale),
                black_box(y_scale),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_frame_build_1k(c: &mut Criterion) {
    let dataset = Dataset::from_observations(synthetic_observations(1_000)).expect("dataset");
    let engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init");

    c.bench_function("frame_build_1k", |b| {
        b.iter(|| {
            let _ = engine.build_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_projection_10k,
    bench_frame_build_1k
);
criterion_main!(benches);
