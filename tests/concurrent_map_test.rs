use std::sync::Arc;

use fuzzlab::SharedMap;

#[test]
fn test_basic_ops() {
    let map = SharedMap::new();
    assert!(map.is_empty());
    map.set("key1", "value1");
    assert_eq!(map.get("key1").as_deref(), Some("value1"));
    assert_eq!(map.len(), 1);
}

#[tokio::test]
async fn test_concurrent_sets_on_distinct_keys() {
    let map = Arc::new(SharedMap::new());
    let mut handles = Vec::new();

    for task in 0..8 {
        let map = Arc::clone(&map);
        handles.push(tokio::task::spawn_blocking(move || {
            for k in 0..100 {
                map.set(&format!("task{}-key{}", task, k), "value");
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(map.len(), 800);
    assert_eq!(map.get("task3-key42").as_deref(), Some("value"));
}

#[tokio::test]
async fn test_concurrent_readers_see_committed_writes() {
    let map = Arc::new(SharedMap::new());
    map.set("stable", "value");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let map = Arc::clone(&map);
        handles.push(tokio::task::spawn_blocking(move || {
            for _ in 0..1000 {
                assert_eq!(map.get("stable").as_deref(), Some("value"));
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}

#[test]
fn test_set_if_absent_keeps_first_value_single_threaded() {
    let map = SharedMap::new();
    assert!(map.set_if_absent("key", "first"));
    assert!(!map.set_if_absent("key", "second"));
    assert_eq!(map.get("key").as_deref(), Some("first"));
}

// Drives two barrier-synchronized threads through set_if_absent on the same
// keys, round after round. A successful claim inserts a key that is never
// removed, so without the lost-update window the claim total would equal the
// key count every round. Duplicate claims are the window firing.
#[test]
fn test_set_if_absent_loses_updates_under_contention() {
    const ROUNDS: usize = 512;
    const KEYS: usize = 16;

    let mut duplicate_claims = 0usize;
    for _ in 0..ROUNDS {
        let map = Arc::new(SharedMap::new());
        let barrier = Arc::new(std::sync::Barrier::new(2));

        let mut handles = Vec::new();
        for task in 0..2 {
            let map = Arc::clone(&map);
            let barrier = Arc::clone(&barrier);
            handles.push(std::thread::spawn(move || {
                barrier.wait();
                let mut claims = 0usize;
                for k in 0..KEYS {
                    if map.set_if_absent(&format!("key{}", k), &format!("task{}", task)) {
                        claims += 1;
                    }
                }
                claims
            }));
        }

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert!(total >= map.len());
        duplicate_claims += total - map.len();
    }

    assert!(
        duplicate_claims > 0,
        "no duplicate claims in {} rounds; set_if_absent looks atomic now",
        ROUNDS
    );
}
