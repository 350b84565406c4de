use agenda_chart::core::HeatClass;

#[test]
fn thresholds_are_fractions_of_axis_max() {
    assert_eq!(HeatClass::classify(90.0, 100.0), HeatClass::Hot);
    assert_eq!(HeatClass::classify(70.0, 100.0), HeatClass::Warm);
    assert_eq!(HeatClass::classify(10.0, 100.0), HeatClass::Cold);
    assert_eq!(HeatClass::classify(40.0, 100.0), HeatClass::Neutral);
}

#[test]
fn boundaries_are_strict() {
    assert_eq!(HeatClass::classify(80.0, 100.0), HeatClass::Warm);
    assert_eq!(HeatClass::classify(60.0, 100.0), HeatClass::Neutral);
    assert_eq!(HeatClass::classify(20.0, 100.0), HeatClass::Neutral);
}

#[test]
fn bands_rescale_with_dataset_maximum() {
    assert_eq!(HeatClass::classify(9.0, 10.0), HeatClass::Hot);
    assert_eq!(HeatClass::classify(9.0, 1000.0), HeatClass::Cold);
}

#[test]
fn all_zero_dataset_is_neutral() {
    assert_eq!(HeatClass::classify(0.0, 0.0), HeatClass::Neutral);
}

#[test]
fn css_classes() {
    assert_eq!(HeatClass::Hot.css_class(), "hot");
    assert_eq!(HeatClass::Warm.css_class(), "warm");
    assert_eq!(HeatClass::Cold.css_class(), "cold");
    assert_eq!(HeatClass::Neutral.css_class(), "");
}
