#![no_main]

use fuzzlab::subjects::arith::add;
use libfuzzer_sys::fuzz_target;

// Commutativity holds everywhere; the monotonicity check and the debug-mode
// overflow panic are what the fuzzer actually digs up.
fuzz_target!(|pair: (i64, i64)| {
    let (a, b) = pair;
    assert_eq!(add(a, b), add(b, a), "a + b != b + a");
    let r = add(a, b);
    if a > 0 && b > 0 {
        assert!(r >= a && r >= b, "positive a and b are larger than r");
    }
});
