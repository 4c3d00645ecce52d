#![no_main]

use std::collections::HashMap;
use std::sync::Arc;

use fuzzlab::SharedMap;
use libfuzzer_sys::fuzz_target;

// Two phases. Phase one replays the op-stream serially against a model
// HashMap and demands exact agreement. Phase two replays the stream's
// set_if_absent ops from two threads: every successful claim inserted a
// key that is never removed, so the claim total may not exceed the number
// of keys in the map. A duplicate claim means the lost-update window fired,
// and the assertion below is the trophy.
fuzz_target!(|data: &[u8]| {
    let map = SharedMap::new();
    let mut model: HashMap<String, String> = HashMap::new();

    let mut i = 0usize;
    while i + 3 <= data.len() {
        let op = data[i] % 3;
        let key = format!("key{}", data[i + 1] % 32);
        let value = format!("value{}", data[i + 2]);
        i += 3;

        match op {
            0 => {
                map.set(&key, &value);
                model.insert(key, value);
            }
            1 => {
                assert_eq!(map.get(&key), model.get(&key).cloned());
            }
            _ => {
                let inserted = map.set_if_absent(&key, &value);
                assert_eq!(inserted, !model.contains_key(&key));
                model.entry(key).or_insert(value);
            }
        }
        assert_eq!(map.len(), model.len());
    }

    // concurrent replay, claims only
    let shared = Arc::new(SharedMap::new());
    let ops: Vec<u8> = data.to_vec();
    let mut handles = Vec::new();
    for _ in 0..2 {
        let shared = Arc::clone(&shared);
        let ops = ops.clone();
        handles.push(std::thread::spawn(move || {
            let mut claims = 0usize;
            let mut i = 0usize;
            while i + 3 <= ops.len() {
                let key = format!("key{}", ops[i + 1] % 32);
                let value = format!("value{}", ops[i + 2]);
                if shared.set_if_absent(&key, &value) {
                    claims += 1;
                }
                i += 3;
            }
            claims
        }));
    }
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert!(
        total <= shared.len(),
        "{} claims for {} keys: set_if_absent lost an update",
        total,
        shared.len()
    );
});
