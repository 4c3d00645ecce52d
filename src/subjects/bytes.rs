/// Byte-slice equality with a seeded bug: only `a`'s indices are walked, so
/// a shorter `b` panics and a longer `b` with a matching prefix compares
/// equal. Left as-is for the fuzzing session.
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}
