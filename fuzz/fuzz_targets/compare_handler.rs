#![no_main]

use fuzzlab::subjects::compare::{
    handle, Compare, STATUS_NOT_ACCEPTABLE, STATUS_OK,
};
use libfuzzer_sys::fuzz_target;

// Drives the handler with well-formed bodies and checks the status mapping.
// The crash it finds is the one inherited from `equals` when `a` outruns `b`.
fuzz_target!(|pair: (String, String)| {
    let (a, b) = pair;
    let body = match Compare::new(&a, &b).to_body() {
        Ok(body) => body,
        Err(_) => return,
    };

    let reply = handle(&body);
    if a == b {
        assert_eq!(reply.status, STATUS_OK, "equal strings must be accepted");
    } else if a.len() == b.len() {
        assert_eq!(
            reply.status, STATUS_NOT_ACCEPTABLE,
            "unequal strings must be rejected"
        );
    }
});
