//! Map helpers in the lodash style: keys need `Clone` to leave the map,
//! values likewise. Iteration order is the map's, so callers sort if they
//! want determinism.

use std::collections::HashMap;

pub fn map_values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    let mut result = Vec::with_capacity(map.len());
    for v in map.values() {
        result.push(v.clone());
    }
    result
}

pub fn map_keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    let mut result = Vec::with_capacity(map.len());
    for k in map.keys() {
        result.push(k.clone());
    }
    result
}
