use agenda_chart::core::{
    AgendaDocument, Contents, Day, Slot, Talk, Track, flatten_with_row_height,
};
use proptest::prelude::*;

fn contents_strategy() -> impl Strategy<Value = Option<Contents>> {
    prop_oneof![
        Just(None),
        "[A-Z]{3,6}".prop_map(|kind| Some(Contents::other(kind))),
        (0u64..500, proptest::option::of(0u64..80)).prop_map(|(likes, feedback)| {
            let talk = Talk::new("talk", likes);
            let talk = match feedback {
                Some(count) => talk.with_feedback(count),
                None => talk,
            };
            Some(Contents::Talk(talk))
        }),
    ]
}

// Day, track and start names are unique within their parent, so labels are unique.
fn agenda_strategy() -> impl Strategy<Value = AgendaDocument> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(contents_strategy(), 0..6), 0..4),
        0..4,
    )
    .prop_map(|days| {
        let days = days
            .into_iter()
            .enumerate()
            .map(|(d, tracks)| {
                let tracks = tracks
                    .into_iter()
                    .enumerate()
                    .map(|(t, slots)| {
                        let slots = slots
                            .into_iter()
                            .enumerate()
                            .map(|(s, contents)| Slot::new(format!("{:02}:00", 9 + s), contents))
                            .collect();
                        Track::new(format!("Track {}", t + 1), slots)
                    })
                    .collect();
                Day::new(format!("{} november", 30 - d), tracks)
            })
            .collect();
        AgendaDocument::new(days)
    })
}

proptest! {
    #[test]
    fn record_count_matches_talk_slots(agenda in agenda_strategy()) {
        let layout = flatten_with_row_height(&agenda, 10.0);
        prop_assert_eq!(layout.record_count(), agenda.talk_count());
        prop_assert_eq!(layout.labels.len(), layout.records.len());
    }

    #[test]
    fn labels_and_records_are_co_sorted(agenda in agenda_strategy()) {
        let layout = flatten_with_row_height(&agenda, 10.0);
        for (label, record) in layout.labels.iter().zip(&layout.records) {
            prop_assert_eq!(label, &record.label);
        }
        for pair in layout.labels.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn maxima_match_records(agenda in agenda_strategy()) {
        let layout = flatten_with_row_height(&agenda, 10.0);
        let max_likes = layout.records.iter().map(|r| r.likes).max().unwrap_or(0);
        let max_feedback = layout.records.iter().map(|r| r.feedback_count).max().unwrap_or(0);
        prop_assert_eq!(layout.max_likes, max_likes);
        prop_assert_eq!(layout.max_feedback, max_feedback);
    }

    #[test]
    fn total_height_is_linear_in_record_count(
        agenda in agenda_strategy(),
        row_height in 1.0f64..200.0
    ) {
        let layout = flatten_with_row_height(&agenda, row_height);
        let expected = layout.record_count() as f64 * row_height;
        prop_assert!((layout.total_height - expected).abs() <= 1e-9);
    }

    #[test]
    fn day_order_does_not_change_output(agenda in agenda_strategy()) {
        let mut reversed = agenda.clone();
        reversed.days.reverse();
        prop_assert_eq!(
            flatten_with_row_height(&agenda, 10.0),
            flatten_with_row_height(&reversed, 10.0)
        );
    }
}
