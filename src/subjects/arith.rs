/// Plain addition. Debug builds panic on overflow, which is precisely what
/// the `add_commutes` harness is fishing for.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
