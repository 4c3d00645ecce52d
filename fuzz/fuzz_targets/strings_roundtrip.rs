#![no_main]

use fuzzlab::subjects::rle::{decode_strings, encode_strings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|triple: (String, String, String)| {
    let (a, b, c) = triple;
    let input = vec![a, b, c];
    let encoded = encode_strings(&input);
    let decoded = decode_strings(&encoded).expect("decoding our own encoding failed");
    assert_eq!(input, decoded, "encode <-> decode mismatch");
});
