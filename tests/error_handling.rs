//! Failure reporting lives in the workflow layer; the core functions are total.

use chrono::{Duration, SubsecRound, TimeZone, Utc};
use stringlens::{
    BackendConfig, QueryEngine, QueryError, Record, StoreError, StringStore, StructuredFilter,
    analyze, translate,
};

#[test]
fn core_functions_never_fail_on_odd_input() {
    let long = "ab".repeat(10_000);
    let inputs = ["", "\0", "🦀🦀", "\u{200B}", "\r\n\t", long.as_str()];

    for text in inputs {
        let props = analyze(text);
        assert_eq!(props.length, text.chars().count());
        let _ = translate(text);
        let _ = StructuredFilter::default().matches(text, &props);
    }
}

#[test]
fn unparseable_query_is_an_empty_filter_not_an_error() {
    let engine = QueryEngine::in_memory();
    engine.create("kept").unwrap();

    let result = engine
        .query_by_natural_language("¿qué? 42 !!! words-without-number")
        .unwrap();
    assert!(result.interpreted_query.parsed_filters.is_empty());
    assert_eq!(result.count, 1);
}

#[test]
fn blank_input_is_rejected() {
    let engine = QueryEngine::in_memory();
    for text in ["", "   ", "\n\t"] {
        assert_eq!(engine.create(text), Err(QueryError::EmptyInput));
    }
}

#[test]
fn duplicate_is_conflict_and_first_record_survives() {
    let engine = QueryEngine::in_memory();
    let first = engine.create("only once").unwrap();

    let err = engine.create("only once").unwrap_err();
    assert_eq!(
        err,
        QueryError::Store(StoreError::Conflict("only once".to_string()))
    );
    assert_eq!(engine.get("only once").unwrap(), Some(first));
}

#[test]
fn lookup_is_exact_match_only() {
    let engine = QueryEngine::in_memory();
    engine.create("Hello").unwrap();

    assert!(engine.get("hello").unwrap().is_none());
    assert!(engine.get("Hello ").unwrap().is_none());
    assert!(engine.get("Hello").unwrap().is_some());
}

#[test]
fn delete_missing_is_not_found() {
    let engine = QueryEngine::in_memory();
    let err = engine.delete("never stored").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn corrupt_payload_is_a_decode_error() {
    use stringlens::{InMemoryBackend, StoreBackend};

    let backend = InMemoryBackend::new();
    backend.put_if_absent("broken", &[0xff, 0xff, 0xff]).unwrap();
    let store = StringStore::with_backend(Box::new(backend));

    assert!(matches!(store.get("broken"), Err(StoreError::Decode(_))));
    assert!(matches!(store.records(), Err(StoreError::Decode(_))));
}

#[cfg(feature = "backend-redb")]
#[test]
fn unopenable_redb_path_is_a_backend_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let cfg = BackendConfig::redb(dir.path().to_string_lossy());

    match QueryEngine::open(&cfg) {
        Err(QueryError::Store(StoreError::Backend(_))) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("opening a directory as a database should fail"),
    }
}

#[test]
fn record_with_subsecond_timestamp_round_trips_through_the_store() {
    let created =
        Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap() + Duration::milliseconds(750);
    let record = Record::with_timestamp("timestamped", created);
    assert_eq!(record.created_at, created.trunc_subsecs(0));
    assert_eq!(record.created_at.timestamp_subsec_nanos(), 0);

    let store = StringStore::in_memory();
    store.insert(&record).unwrap();
    let stored = store.get("timestamped").unwrap().unwrap();
    assert_eq!(stored.created_at.to_rfc3339(), "2025-03-04T05:06:07+00:00");
    assert_eq!(stored, record);
}
