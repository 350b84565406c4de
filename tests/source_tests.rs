use std::path::PathBuf;

use agenda_chart::source::{AgendaSource, load_agenda};
use agenda_chart::{ChartError, flatten};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/agenda_small.json")
}

#[test]
fn loads_agenda_from_file_path() {
    let source = AgendaSource::parse(fixture_path().to_str().expect("utf-8 path"));
    assert!(matches!(source, AgendaSource::Path(_)));

    let agenda = load_agenda(&source).expect("load fixture");
    assert_eq!(flatten(&agenda).record_count(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let source = AgendaSource::Path(fixture_path().with_file_name("does_not_exist.json"));
    let err = load_agenda(&source).expect_err("missing file");
    assert!(matches!(err, ChartError::Io(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn invalid_json_file_is_a_decode_error() {
    let path = std::env::temp_dir().join(format!(
        "agenda-chart-invalid-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, b"{ not json").expect("write temp file");

    let err = load_agenda(&AgendaSource::Path(path.clone())).expect_err("invalid json");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, ChartError::Decode(_)));
}

#[test]
fn url_sources_display_verbatim() {
    let source = AgendaSource::parse("  HTTPS://example.org/agenda.json ");
    assert_eq!(
        source,
        AgendaSource::Url("HTTPS://example.org/agenda.json".to_owned())
    );
    assert_eq!(source.to_string(), "HTTPS://example.org/agenda.json");
}
