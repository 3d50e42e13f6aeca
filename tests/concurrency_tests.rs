//! Concurrency and thread safety tests for the store and query engine

use std::sync::{Arc, Barrier};
use std::thread;

use stringlens::{BackendConfig, QueryEngine, QueryError, StoreError, StructuredFilter, analyze};

fn assert_single_winner(engine: Arc<QueryEngine>, threads: usize) {
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                engine.create("contended text")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "exactly one insert should succeed");
    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(
            result,
            Err(QueryError::Store(StoreError::Conflict(_)))
        ));
    }
    assert_eq!(engine.store().len().unwrap(), 1);
}

#[test]
fn concurrent_identical_inserts_in_memory() {
    assert_single_winner(Arc::new(QueryEngine::in_memory()), 16);
}

#[cfg(feature = "backend-redb")]
#[test]
fn concurrent_identical_inserts_redb() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = BackendConfig::redb(dir.path().join("race.redb").to_string_lossy());
    assert_single_winner(Arc::new(QueryEngine::open(&cfg).unwrap()), 8);
}

#[test]
fn concurrent_distinct_inserts_all_land() {
    let engine = Arc::new(QueryEngine::open(&BackendConfig::in_memory()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..50 {
                    engine
                        .create(&format!("thread {t} item {i}"))
                        .expect("distinct text should insert");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.store().len().unwrap(), 400);
    let four_words = StructuredFilter::new().with_word_count(4);
    assert_eq!(engine.query_by_filter(&four_words).unwrap().count, 400);
}

#[test]
fn queries_run_alongside_writers() {
    let engine = Arc::new(QueryEngine::in_memory());
    for i in 0..20 {
        engine.create(&format!("seed{i}")).unwrap();
    }

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..100 {
                engine.create(&format!("late {i}")).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..25 {
                    let result = engine.query_by_natural_language("single word").unwrap();
                    // Seeds are single words and are never removed.
                    assert!(result.count >= 20);
                    assert_eq!(result.count, result.data.len());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let single = engine.query_by_natural_language("single word").unwrap();
    assert_eq!(single.count, 20);
    assert_eq!(engine.store().len().unwrap(), 120);
}

#[test]
fn analyze_is_thread_safe() {
    let text = Arc::new("Concurrent analysis of the same text".to_string());
    let expected = analyze(&text);

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let text = Arc::clone(&text);
            thread::spawn(move || analyze(&text))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), expected, "thread {i} disagreed");
    }
}
