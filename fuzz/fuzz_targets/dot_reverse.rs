#![no_main]

use fuzzlab::subjects::dot::{dot, floats_from_bytes, reverse};
use libfuzzer_sys::fuzz_target;

// Reverse-invariance of the dot product. Floating-point addition is not
// associative, so this target can trip on pathological inputs; that
// discussion is the point of the demo.
fuzz_target!(|pair: (&[u8], &[u8])| {
    let (x, y) = pair;
    let (Some(mut a), Some(mut b)) = (floats_from_bytes(x), floats_from_bytes(y)) else {
        return;
    };

    let forward = dot(&a, &b);
    reverse(&mut a);
    reverse(&mut b);
    let reversed = dot(&a, &b);

    if !forward.is_nan() {
        assert_eq!(
            forward.to_bits(),
            reversed.to_bits(),
            "forward and reversed results differ: {} vs {}",
            forward,
            reversed
        );
    }
});
