use scatter_rs::dataset::Dataset;

const FIXTURE_PATH: &str = "tests/fixtures/census.csv";

#[test]
fn fixture_loads_with_numeric_coercion() {
    let dataset = Dataset::from_path(FIXTURE_PATH).expect("load fixture");
    assert_eq!(dataset.len(), 16);

    for observation in dataset.observations() {
        assert!(observation.poverty.is_finite());
        assert!(observation.age.is_finite());
        assert!(observation.income.is_finite());
        assert!(observation.healthcare.is_finite());
        assert!(observation.smokes.is_finite());
        assert!(observation.obesity.is_finite());
    }

    let alabama = dataset.get(0).expect("first row");
    assert_eq!(alabama.state, "Alabama");
    assert_eq!(alabama.income, 42_830.0);
}

#[test]
fn observation_order_matches_the_file() {
    let dataset = Dataset::from_path(FIXTURE_PATH).expect("load fixture");
    let abbrs: Vec<&str> = dataset
        .observations()
        .iter()
        .take(4)
        .map(|observation| observation.abbr.as_str())
        .collect();
    assert_eq!(abbrs, vec!["AL", "AK", "AZ", "AR"]);

    assert_eq!(dataset.index_of_abbr("AZ"), Some(2));
}

#[test]
fn unknown_columns_are_ignored() {
    // The fixture carries a `single` column no Observation field names.
    let dataset = Dataset::from_path(FIXTURE_PATH).expect("load fixture");
    assert!(dataset.index_of_abbr("MO").is_some());
}

#[test]
fn missing_file_is_fatal() {
    assert!(Dataset::from_path("tests/fixtures/does_not_exist.csv").is_err());
}
