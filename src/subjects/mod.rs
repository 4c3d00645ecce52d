//! Functions that exist to be fuzzed. Some of them are wrong on purpose;
//! the harnesses under `fuzz/` are there to find out exactly how.

pub mod arith;
pub mod bytes;
pub mod compare;
pub mod dot;
pub mod rle;
