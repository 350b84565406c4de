use agenda_chart::ChartError;
use agenda_chart::core::{BandScale, LinearScale, ticks};
use approx::assert_relative_eq;

#[test]
fn metric_scale_maps_max_to_full_width() {
    let scale = LinearScale::for_metric(325, 600.0).expect("valid scale");

    assert_eq!(scale.domain(), (0.0, 325.0));
    assert_eq!(scale.range(), (0.0, 600.0));
    assert_relative_eq!(scale.map(0.0), 0.0);
    assert_relative_eq!(scale.map(325.0), 600.0);
    assert_relative_eq!(scale.map(162.5), 300.0);
}

#[test]
fn zero_metric_maps_everything_to_range_start() {
    let scale = LinearScale::for_metric(0, 600.0).expect("valid scale");
    assert_eq!(scale.map(0.0), 0.0);
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    let err = LinearScale::new(5.0, 5.0, 0.0, 100.0).expect_err("degenerate domain");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 0.0, f64::INFINITY).is_err());
}

#[test]
fn linear_scale_ticks_use_nice_steps() {
    let scale = LinearScale::for_metric(325, 600.0).expect("valid scale");
    assert_eq!(scale.ticks(4), vec![0.0, 100.0, 200.0, 300.0]);
    assert_eq!(ticks(0.0, 30.0, 4), vec![0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn band_scale_without_padding_splits_range_evenly() {
    let scale = BandScale::new(["a", "b", "c", "d"], 0.0, 100.0).expect("band scale");

    assert_relative_eq!(scale.step(), 25.0);
    assert_relative_eq!(scale.bandwidth(), 25.0);
    assert_eq!(scale.position("a"), Some(0.0));
    assert_eq!(scale.position("d"), Some(75.0));
    assert_eq!(scale.position("missing"), None);
}

#[test]
fn band_scale_padding_matches_d3() {
    // d3.scaleBand().domain(["a","b","c"]).range([0, 310]).padding(0.1)
    let scale = BandScale::new(["a", "b", "c"], 0.0, 310.0)
        .expect("band scale")
        .with_padding(0.1)
        .expect("padding");

    assert_relative_eq!(scale.step(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(scale.bandwidth(), 90.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position("a").expect("a"), 10.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position("b").expect("b"), 110.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position("c").expect("c"), 210.0, epsilon = 1e-9);
}

#[test]
fn band_scale_rejects_invalid_padding() {
    let scale = BandScale::new(["a"], 0.0, 10.0).expect("band scale");
    assert!(scale.clone().with_padding(1.5).is_err());
    assert!(scale.with_padding(f64::NAN).is_err());
}

#[test]
fn duplicate_labels_keep_first_position() {
    let scale = BandScale::new(["a", "b", "a"], 0.0, 20.0).expect("band scale");
    assert_eq!(scale.len(), 2);
    assert_eq!(scale.index_of("a"), Some(0));
    assert_eq!(scale.index_of("b"), Some(1));
}

#[test]
fn empty_band_scale_is_valid() {
    let scale = BandScale::new(Vec::<String>::new(), 0.0, 0.0)
        .expect("band scale")
        .with_padding(0.1)
        .expect("padding");
    assert!(scale.is_empty());
    assert_eq!(scale.step(), 0.0);
}
