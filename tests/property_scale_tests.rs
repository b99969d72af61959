use proptest::prelude::*;
use scatter_rs::core::types::{Margins, PlotArea, Viewport};
use scatter_rs::core::{LinearScale, Observation, XMetric, YMetric};

fn plot() -> PlotArea {
    PlotArea::from_viewport(Viewport::new(960, 500), Margins::default()).expect("plot area")
}

fn observation_with(poverty: f64, healthcare: f64) -> Observation {
    Observation {
        id: 1,
        state: "State".to_owned(),
        abbr: "ST".to_owned(),
        poverty,
        age: 35.0,
        income: 50_000.0,
        healthcare,
        smokes: 18.0,
        obesity: 28.0,
    }
}

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, 0.0, 820.0).expect("valid scale");
        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7 * domain_span.max(1.0));
    }

    #[test]
    fn x_domain_padding_property(values in proptest::collection::vec(0.1f64..10_000.0, 1..40)) {
        let observations: Vec<Observation> = values
            .iter()
            .map(|value| observation_with(*value, 10.0))
            .collect();

        let scale = LinearScale::x_from_observations(&observations, XMetric::Poverty, plot())
            .expect("x scale");
        let (start, end) = scale.domain();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((start - 0.8 * min).abs() <= 1e-9 * min.max(1.0));
        prop_assert!((end - 1.2 * max).abs() <= 1e-9 * max.max(1.0));
    }

    #[test]
    fn y_domain_padding_property(values in proptest::collection::vec(0.1f64..10_000.0, 1..40)) {
        let observations: Vec<Observation> = values
            .iter()
            .map(|value| observation_with(15.0, *value))
            .collect();

        let scale = LinearScale::y_from_observations(&observations, YMetric::Healthcare, plot())
            .expect("y scale");
        let (start, end) = scale.domain();

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(start, 0.0);
        prop_assert!((end - 1.1 * max).abs() <= 1e-9 * max.max(1.0));
    }

    #[test]
    fn pixel_mapping_is_monotonic(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        low_factor in 0.0f64..0.49,
        high_factor in 0.51f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let low = domain_start + low_factor * domain_span;
        let high = domain_start + high_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, 0.0, 820.0).expect("valid scale");
        let low_px = scale.value_to_pixel(low).expect("low");
        let high_px = scale.value_to_pixel(high).expect("high");
        prop_assert!(low_px < high_px);

        let inverted = LinearScale::new(domain_start, domain_end, 390.0, 0.0).expect("valid scale");
        let low_px = inverted.value_to_pixel(low).expect("low");
        let high_px = inverted.value_to_pixel(high).expect("high");
        prop_assert!(low_px > high_px);
    }
}
