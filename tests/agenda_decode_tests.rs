use agenda_chart::{ChartError, flatten};
use agenda_chart::core::{AgendaDocument, Contents};

const AGENDA_JSON: &str = include_str!("fixtures/agenda_small.json");

#[test]
fn fixture_decodes_with_talk_and_other_contents() {
    let agenda = AgendaDocument::from_json_str(AGENDA_JSON).expect("decode agenda");

    assert_eq!(agenda.days.len(), 2);
    assert_eq!(agenda.days[0].name, "25 november");
    assert_eq!(agenda.talk_count(), 5);

    let breaks = agenda
        .slots()
        .filter(|(_, _, slot)| matches!(&slot.contents, Some(Contents::Other { kind }) if kind == "BREAK"))
        .count();
    assert_eq!(breaks, 1);

    let empty = agenda
        .slots()
        .filter(|(_, _, slot)| slot.contents.is_none())
        .count();
    assert_eq!(empty, 1);
}

#[test]
fn missing_talk_fields_default_to_zero_and_empty() {
    let agenda = AgendaDocument::from_json_str(
        r#"{"days":[{"name":"d","tracks":[{"name":"t","slots":[
            {"start":"09:00","contents":{"type":"TALK"}}
        ]}]}]}"#,
    )
    .expect("decode agenda");

    let (_, _, slot) = agenda.slots().next().expect("one slot");
    let talk = slot.talk().expect("talk");
    assert_eq!(talk.title, "");
    assert_eq!(talk.total_likes, 0);
    assert_eq!(talk.feedback_count(), 0);
    assert!(talk.authors.is_empty());
}

#[test]
fn null_contents_and_missing_collections_are_tolerated() {
    let agenda = AgendaDocument::from_json_str(
        r#"{"days":[{"name":"d"},{"name":"e","tracks":[{"name":"t","slots":[{"start":"1","contents":null}]}]}]}"#,
    )
    .expect("decode agenda");
    assert_eq!(agenda.days[0].tracks.len(), 0);
    assert_eq!(agenda.talk_count(), 0);

    let empty = AgendaDocument::from_json_str("{}").expect("decode empty object");
    assert!(empty.days.is_empty());
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = AgendaDocument::from_json_str("{\"days\": [").expect_err("must fail");
    assert!(matches!(err, ChartError::Decode(_)));
}

#[test]
fn unusable_counts_default_to_zero() {
    let agenda = AgendaDocument::from_json_str(
        r#"{"days":[{"name":"d","tracks":[{"name":"t","slots":[
            {"start":"09:00","contents":{"type":"TALK","title":"neg","totalLikes":-3}},
            {"start":"10:00","contents":{"type":"TALK","title":"float","totalLikes":12.0,
                "feedback":{"entriesCount":4.5}}},
            {"start":"11:00","contents":{"type":"TALK","title":"text","totalLikes":"many",
                "feedback":"none"}}
        ]}]}]}"#,
    )
    .expect("decode agenda");

    let talks: Vec<_> = agenda.slots().filter_map(|(_, _, slot)| slot.talk()).collect();
    assert_eq!(talks.len(), 3);
    assert_eq!(talks[0].total_likes, 0);
    assert_eq!(talks[1].total_likes, 12);
    assert_eq!(talks[1].feedback_count(), 4);
    assert_eq!(talks[2].total_likes, 0);
    assert_eq!(talks[2].feedback_count(), 0);
}

#[test]
fn null_strings_decode_as_empty() {
    let agenda = AgendaDocument::from_json_str(
        r#"{"days":[{"name":null,"tracks":[{"name":"t","slots":[
            {"start":null,"contents":{"type":"TALK","title":null,
                "authors":[{"name":"a","avatar":null},{"name":null},42]}}
        ]}]}]}"#,
    )
    .expect("decode agenda");

    let (day, _, slot) = agenda.slots().next().expect("one slot");
    assert_eq!(day.name, "");
    assert_eq!(slot.start, "");
    let talk = slot.talk().expect("talk");
    assert_eq!(talk.title, "");
    assert_eq!(talk.authors.len(), 2);
    assert_eq!(talk.authors[0].name, "a");
    assert_eq!(talk.authors[0].avatar, "");
    assert_eq!(talk.authors[1].name, "");
}

#[test]
fn mistyped_break_slot_keeps_neighbouring_talk() {
    let agenda = AgendaDocument::from_json_str(
        r#"{"days":[{"name":"d","tracks":[{"name":"t","slots":[
            {"start":"09:00","contents":{"type":"TALK","title":"keynote","totalLikes":5}},
            {"start":"10:00","contents":{"type":"BREAK","totalLikes":-1}},
            {"start":"10:30","contents":{"type":"BREAK","title":5}},
            {"start":"11:00","contents":{"type":"LUNCH","feedback":{"entriesCount":"n/a"}}},
            {"start":"12:00","contents":"coffee"}
        ]}]}]}"#,
    )
    .expect("decode agenda");

    assert_eq!(agenda.talk_count(), 1);
    let layout = flatten(&agenda);
    assert_eq!(layout.records.len(), 1);
    assert_eq!(layout.records[0].title, "keynote");
    assert_eq!(layout.max_likes, 5);

    let (_, _, coffee) = agenda.slots().last().expect("last slot");
    assert!(coffee.contents.is_none());
}

#[test]
fn talk_contents_round_trip_through_wire_shape() {
    let agenda = AgendaDocument::from_json_str(AGENDA_JSON).expect("decode agenda");
    let encoded = serde_json::to_string(&agenda).expect("encode agenda");
    let decoded = AgendaDocument::from_json_str(&encoded).expect("decode again");
    assert_eq!(agenda, decoded);
    assert!(encoded.contains(r#""type":"TALK""#));
    assert!(encoded.contains(r#""totalLikes":325"#));
}
