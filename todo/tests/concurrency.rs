//! Concurrent access to a shared `Store`.
//!
//! Spawns threads against one store and checks that no update is lost, ids
//! stay unique, and readers only ever see whole items.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use todo::test_support::{ids_of, store_with};
use todo::{Item, Store, StoreError};

const THREADS: usize = 16;
const PER_THREAD: usize = 250;

#[test]
fn concurrent_adds_lose_nothing() {
    let store = Store::new();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let store = &store;
            scope.spawn(move || {
                for n in 0..PER_THREAD {
                    store.add(format!("t{t}-{n}"));
                }
            });
        }
    });

    let items = store.list();
    assert_eq!(items.len(), THREADS * PER_THREAD);

    let ids: HashSet<_> = items.iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids.len(), THREADS * PER_THREAD);

    let messages: HashSet<_> = items.iter().map(|item| item.message.clone()).collect();
    assert_eq!(messages.len(), THREADS * PER_THREAD);
    assert!(items.iter().all(|item| !item.complete));
}

#[test]
fn per_thread_insertion_order_is_preserved() {
    let store = Arc::new(Store::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for n in 0..PER_THREAD {
                    store.add(format!("{t}:{n}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread");
    }

    let items = store.list();
    for t in 0..THREADS {
        let prefix = format!("{t}:");
        let seq: Vec<usize> = items
            .iter()
            .filter_map(|item| item.message.strip_prefix(&prefix))
            .map(|n| n.parse().expect("sequence number"))
            .collect();
        assert_eq!(seq, (0..PER_THREAD).collect::<Vec<_>>());
    }
}

#[test]
fn racing_deletes_remove_each_item_once() {
    let messages: Vec<String> = (0..500).map(|n| n.to_string()).collect();
    let refs: Vec<&str> = messages.iter().map(String::as_str).collect();
    let (store, ids) = store_with(&refs);

    let successes: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = &store;
                let ids = &ids;
                scope.spawn(move || {
                    ids.iter()
                        .filter(|id| store.delete(id.as_str()).is_ok())
                        .count()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("deleter thread"))
            .sum()
    });

    assert_eq!(successes, ids.len());
    assert!(store.is_empty());
}

#[test]
fn mixed_operations_leave_consistent_state() {
    let (store, seeded) = store_with(&["a", "b", "c", "d", "e", "f"]);
    let store = Arc::new(store);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let items = store.list();
                    let ids: HashSet<_> = items.iter().map(|item| &item.id).collect();
                    assert_eq!(ids.len(), items.len(), "duplicate id observed");
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            let seeded = seeded.clone();
            thread::spawn(move || {
                for n in 0..100 {
                    let id = store.add(format!("w{t}-{n}"));
                    if n % 2 == 0 {
                        store.complete(id.as_str()).expect("complete own item");
                    } else {
                        store.delete(id.as_str()).expect("delete own item");
                    }
                    let target = &seeded[n % seeded.len()];
                    match store.complete(target.as_str()) {
                        Ok(()) | Err(StoreError::NotFound(_)) => {}
                    }
                }
            })
        })
        .collect();

    for handle in readers.into_iter().chain(writers) {
        handle.join().expect("worker thread");
    }

    let items = store.list();
    // seeded items plus one surviving (completed) item per even iteration
    assert_eq!(items.len(), seeded.len() + 4 * 50);
    assert_eq!(ids_of(&items[..seeded.len()]), seeded);
    assert!(items.iter().all(|item: &Item| item.complete));
}
