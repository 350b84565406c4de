use agenda_chart::core::{BandScale, LinearScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        max in 1u64..1_000_000,
        width in 1.0f64..4096.0,
        value_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::for_metric(max, width).expect("valid scale");
        let value = value_factor * max as f64;

        let px = scale.map(value);
        prop_assert!((0.0..=width + 1e-9).contains(&px));
        prop_assert!((scale.invert(px) - value).abs() <= 1e-6);
    }

    #[test]
    fn band_positions_strictly_increase(
        count in 1usize..200,
        row_height in 1.0f64..100.0,
        padding in 0.0f64..0.9
    ) {
        let labels: Vec<String> = (0..count).map(|i| format!("row-{i:04}")).collect();
        let scale = BandScale::new(labels.iter().cloned(), 0.0, count as f64 * row_height)
            .expect("band scale")
            .with_padding(padding)
            .expect("padding");

        let positions: Vec<f64> = labels
            .iter()
            .map(|label| scale.position(label).expect("known label"))
            .collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let last = positions[positions.len() - 1];
        prop_assert!(last + scale.bandwidth() <= count as f64 * row_height + 1e-6);
        prop_assert!(positions[0] >= -1e-9);
    }
}
