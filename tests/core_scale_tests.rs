use approx::assert_relative_eq;
use scatter_rs::core::types::{Margins, PlotArea, Viewport};
use scatter_rs::core::{LinearScale, XMetric, YMetric};
use scatter_rs::dataset::Dataset;

const CSV: &str = "\
id,state,abbr,poverty,age,income,healthcare,single,smokes,obesity
1,Alpha,AA,10.0,30.0,40000,5.0,40.0,10.0,20.0
2,Bravo,BB,20.0,40.0,60000,10.0,41.0,20.0,30.0
";

fn plot() -> PlotArea {
    PlotArea::from_viewport(Viewport::new(960, 500), Margins::default()).expect("plot area")
}

#[test]
fn plot_area_is_canvas_minus_margins() {
    let plot = plot();
    assert_eq!(plot.origin_x, 100.0);
    assert_eq!(plot.origin_y, 20.0);
    assert_eq!(plot.width, 820.0);
    assert_eq!(plot.height, 390.0);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 820.0).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 820.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 820.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 100.0, 100.0).is_err());
}

#[test]
fn x_domain_is_padded_by_point_eight_and_one_point_two() {
    let dataset = Dataset::from_reader(CSV.as_bytes()).expect("load");
    let scale = LinearScale::x_from_observations(dataset.observations(), XMetric::Poverty, plot())
        .expect("x scale");

    let (start, end) = scale.domain();
    assert_relative_eq!(start, 0.8 * 10.0, epsilon = 1e-9);
    assert_relative_eq!(end, 1.2 * 20.0, epsilon = 1e-9);
    assert_eq!(scale.range(), (0.0, 820.0));
}

#[test]
fn y_domain_starts_at_zero_with_inverted_range() {
    let dataset = Dataset::from_reader(CSV.as_bytes()).expect("load");
    let scale = LinearScale::y_from_observations(dataset.observations(), YMetric::Healthcare, plot())
        .expect("y scale");

    let (start, end) = scale.domain();
    assert_eq!(start, 0.0);
    assert_relative_eq!(end, 1.1 * 10.0, epsilon = 1e-9);

    // Larger values map to smaller pixel offsets.
    let zero = scale.value_to_pixel(0.0).expect("zero");
    let top = scale.value_to_pixel(11.0).expect("top");
    assert_eq!(zero, 390.0);
    assert_relative_eq!(top, 0.0, epsilon = 1e-9);
}

#[test]
fn scales_over_empty_dataset_fail() {
    assert!(LinearScale::x_from_observations(&[], XMetric::Age, plot()).is_err());
    assert!(LinearScale::y_from_observations(&[], YMetric::Smokes, plot()).is_err());
}
