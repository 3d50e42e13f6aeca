//! Create then query, end to end through the umbrella crate.

use stringlens::{
    BackendConfig, FilterQueryResult, QueryEngine, Record, StructuredFilter, filter_records,
    interpret,
};

const CORPUS: &[&str] = &[
    "racecar",
    "level",
    "hello world",
    "never odd or even",
    "step on no pets",
    "the quick brown fox",
    "xylophone",
    "a",
    "box of six wax",
];

fn seeded_engine() -> QueryEngine {
    let engine = QueryEngine::in_memory();
    for text in CORPUS {
        engine.create(text).unwrap();
    }
    engine
}

fn values(result: &[Record]) -> Vec<&str> {
    let mut out: Vec<&str> = result.iter().map(|r| r.value.as_str()).collect();
    out.sort_unstable();
    out
}

#[test]
fn created_record_is_found_by_its_own_properties() {
    let engine = seeded_engine();
    let record = engine.create("noon").unwrap();
    let props = &record.properties;

    let filter = StructuredFilter::new()
        .with_palindrome(props.is_palindrome)
        .with_min_length(props.length)
        .with_max_length(props.length)
        .with_word_count(props.word_count)
        .with_contains_character("n");

    let result = engine.query_by_filter(&filter).unwrap();
    assert_eq!(result.data, vec![record]);
    assert_eq!(result.count, 1);
}

#[test]
fn empty_filter_returns_every_record() {
    let engine = seeded_engine();
    let FilterQueryResult { data, count, .. } =
        engine.query_by_filter(&StructuredFilter::default()).unwrap();

    assert_eq!(count, CORPUS.len());
    assert_eq!(values(&data).len(), CORPUS.len());
}

#[test]
fn palindromes_by_natural_language() {
    let engine = seeded_engine();
    let result = engine.query_by_natural_language("all palindromes").unwrap();

    // Palindrome status is computed on the raw text, spaces included, so
    // "never odd or even" is not one.
    assert_eq!(
        values(&result.data),
        vec!["a", "level", "racecar", "step on no pets"]
    );
}

#[test]
fn single_word_palindromes() {
    let engine = seeded_engine();
    let result = engine
        .query_by_natural_language("find a single word palindrome")
        .unwrap();

    assert_eq!(values(&result.data), vec!["a", "level", "racecar"]);
}

#[test]
fn length_and_containment_from_natural_language() {
    let engine = seeded_engine();

    let longer = engine
        .query_by_natural_language("strings longer than 10 characters")
        .unwrap();
    assert_eq!(
        values(&longer.data),
        vec![
            "box of six wax",
            "hello world",
            "never odd or even",
            "step on no pets",
            "the quick brown fox"
        ]
    );

    let with_x = engine
        .query_by_natural_language("four words containing 'x'")
        .unwrap();
    assert_eq!(values(&with_x.data), vec!["box of six wax", "the quick brown fox"]);
    assert_eq!(
        with_x.interpreted_query.parsed_filters,
        StructuredFilter::new()
            .with_word_count(4)
            .with_contains_character("x")
    );
}

#[test]
fn contains_is_checked_against_whitespace_stripped_text() {
    let engine = seeded_engine();
    // "hello world" has "lowo" only once the space is gone.
    let filter = StructuredFilter::new().with_contains_character("lowo");
    let result = engine.query_by_filter(&filter).unwrap();
    assert_eq!(values(&result.data), vec!["hello world"]);
}

#[test]
fn engine_and_pure_functions_agree() {
    let engine = seeded_engine();
    let records = engine.store().records().unwrap();

    for query in [
        "palindromes",
        "two words",
        "at most 5 characters",
        "contains the letter o",
        "nothing to see here",
    ] {
        let interpreted = interpret(query);
        let expected = filter_records(&interpreted.parsed_filters, &records);
        let actual = engine.query_by_natural_language(query).unwrap();

        assert_eq!(values(&actual.data), values(&expected), "{query}");
        assert_eq!(actual.interpreted_query, interpreted);
    }
}

#[test]
fn deleted_records_drop_out_of_queries() {
    let engine = seeded_engine();
    engine.delete("racecar").unwrap();

    let result = engine.query_by_natural_language("palindromes").unwrap();
    assert!(!values(&result.data).contains(&"racecar"));
    assert!(engine.get("racecar").unwrap().is_none());

    // The same text can be created again after deletion.
    engine.create("racecar").unwrap();
}

#[cfg(feature = "backend-redb")]
#[test]
fn redb_round_trip_matches_in_memory_results() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = BackendConfig::redb(dir.path().join("strings.redb").to_string_lossy());

    {
        let engine = QueryEngine::open(&cfg).unwrap();
        for text in CORPUS {
            engine.create(text).unwrap();
        }
    }

    let persisted = QueryEngine::open(&cfg).unwrap();
    let memory = seeded_engine();
    for query in ["palindromes", "single word", "longer than 8 characters"] {
        let a = persisted.query_by_natural_language(query).unwrap();
        let b = memory.query_by_natural_language(query).unwrap();
        assert_eq!(values(&a.data), values(&b.data), "{query}");
    }
}

#[test]
fn in_memory_config_builds_an_empty_engine() {
    let engine = QueryEngine::open(&BackendConfig::in_memory()).unwrap();
    assert!(engine.store().is_empty().unwrap());
}
