//! When NOT to use generics: if the body only ever calls trait methods, a
//! trait object does the same job without stamping out a monomorphized copy
//! per caller type.

use std::io::{self, Read};

/// Good: one compiled body; dynamic dispatch is plenty for I/O.
pub fn read_all(r: &mut dyn Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Bad: semantically identical to `read_all`, but every caller type gets
/// its own copy of the body for nothing.
pub fn read_all_generic<T: Read>(r: &mut T) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(buf)
}
