/// Dot product; mismatched lengths yield NaN rather than an error so the
/// harness can feed arbitrary pairs.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::NAN;
    }
    let mut t = 0.0;
    for i in 0..a.len() {
        t += a[i] * b[i];
    }
    t
}

/// Generic in-place reverse, written out longhand because the swap loop is
/// the demo.
pub fn reverse<T>(vs: &mut [T]) {
    let mut i = 0;
    let mut j = vs.len().saturating_sub(1);
    while i < vs.len() / 2 {
        vs.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Reinterprets fuzz bytes as little-endian f64s. `None` when the input is
/// not a whole number of 8-byte chunks, which harnesses treat as a skip.
pub fn floats_from_bytes(b: &[u8]) -> Option<Vec<f64>> {
    if b.len() % 8 != 0 {
        return None;
    }
    let mut xs = Vec::with_capacity(b.len() / 8);
    for chunk in b.chunks_exact(8) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        xs.push(f64::from_le_bytes(raw));
    }
    Some(xs)
}
