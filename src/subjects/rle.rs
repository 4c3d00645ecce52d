//! Length-prefixed string list codec, the round-trip fuzzing subject.
//!
//! Wire shape: `<uvarint length> <bytes>` repeated, no header, no framing.
//! Strictly a toy format.

use crate::utils::error::{LabError, Result};

const MAX_VARINT_LEN: usize = 10;

/// Appends `v` as an unsigned LEB128 varint, low 7 bits first.
pub fn put_uvarint(buf: &mut Vec<u8>, mut v: u64) {
    while v >= 0x80 {
        buf.push((v as u8) | 0x80);
        v >>= 7;
    }
    buf.push(v as u8);
}

/// Reads one uvarint from the front of `data`, returning the value and the
/// number of bytes consumed. `offset` only labels errors.
pub fn uvarint(data: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift = 0u32;
    for (i, &byte) in data.iter().enumerate() {
        if i >= MAX_VARINT_LEN || (i == MAX_VARINT_LEN - 1 && byte > 1) {
            return Err(LabError::VarintOverflow { offset });
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }
    Err(LabError::TruncatedVarint { offset })
}

pub fn encode_strings(vs: &[String]) -> Vec<u8> {
    let mut rs = Vec::new();
    for v in vs {
        put_uvarint(&mut rs, v.len() as u64);
        rs.extend_from_slice(v.as_bytes());
    }
    rs
}

pub fn decode_strings(mut data: &[u8]) -> Result<Vec<String>> {
    let mut vs = Vec::new();
    let mut offset = 0;
    while !data.is_empty() {
        let (len, n) = uvarint(data, offset)?;
        data = &data[n..];
        offset += n;
        if len > data.len() as u64 {
            return Err(LabError::LengthOutOfRange {
                declared: len,
                remaining: data.len(),
            });
        }
        let len = len as usize;
        vs.push(String::from_utf8(data[..len].to_vec())?);
        data = &data[len..];
        offset += len;
    }
    Ok(vs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uvarint_roundtrip() {
        for v in [0u64, 1, 127, 128, 300, u64::MAX] {
            let mut buf = Vec::new();
            put_uvarint(&mut buf, v);
            let (decoded, n) = uvarint(&buf, 0).unwrap();
            assert_eq!(decoded, v);
            assert_eq!(n, buf.len());
        }
    }

    #[test]
    fn test_uvarint_truncated() {
        let err = uvarint(&[0x80], 3).unwrap_err();
        assert!(matches!(err, LabError::TruncatedVarint { offset: 3 }));
    }

    #[test]
    fn test_uvarint_overflow() {
        // eleven continuation bytes can never terminate inside 64 bits
        let err = uvarint(&[0xff; 11], 0).unwrap_err();
        assert!(matches!(err, LabError::VarintOverflow { .. }));
    }

    #[test]
    fn test_encode_decode() {
        let input = vec!["alpha".to_string(), "".to_string(), "gamma".to_string()];
        let encoded = encode_strings(&input);
        let decoded = decode_strings(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_strings(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_length_past_end() {
        // declares 5 bytes, supplies 2
        let err = decode_strings(&[5, b'h', b'i']).unwrap_err();
        assert!(matches!(
            err,
            LabError::LengthOutOfRange {
                declared: 5,
                remaining: 2
            }
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode_strings(&[2, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, LabError::InvalidUtf8(_)));
    }
}
