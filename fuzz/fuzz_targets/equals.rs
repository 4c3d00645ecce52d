#![no_main]

use libfuzzer_sys::fuzz_target;

// Finds the seeded bug in `equals`: it walks `a`'s indices, so any `b`
// shorter than `a` panics on the out-of-bounds read.
fuzz_target!(|pair: (&[u8], &[u8])| {
    let (a, b) = pair;
    fuzzlab::subjects::bytes::equals(a, b);
});
