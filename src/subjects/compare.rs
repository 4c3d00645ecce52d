//! HTTP-shaped comparison endpoint, reduced to `bytes in, reply out` so the
//! harness can drive it without a listener.

use crate::subjects::bytes::equals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Compare {
    pub a: String,
    pub b: String,
}

impl Compare {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// Serializes the request body the way a client would.
    pub fn to_body(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[derive(Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_ACCEPTABLE: u16 = 406;

/// Decodes a `Compare` body and reports whether the two strings match.
/// Inherits `equals`' quirks on length mismatches, which is the point.
pub fn handle(body: &[u8]) -> Reply {
    let input: Compare = match serde_json::from_slice(body) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!("rejecting body: {}", err);
            return Reply {
                status: STATUS_BAD_REQUEST,
                body: err.to_string(),
            };
        }
    };

    if !equals(input.a.as_bytes(), input.b.as_bytes()) {
        return Reply {
            status: STATUS_NOT_ACCEPTABLE,
            body: "this is not acceptable".to_string(),
        };
    }

    Reply {
        status: STATUS_OK,
        body: "OK".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings_ok() {
        let body = Compare::new("same", "same").to_body().unwrap();
        let reply = handle(&body);
        assert_eq!(reply.status, STATUS_OK);
        assert_eq!(reply.body, "OK");
    }

    #[test]
    fn test_mismatch_not_acceptable() {
        let body = br#"{"a": "left", "b": "lost"}"#;
        let reply = handle(body);
        assert_eq!(reply.status, STATUS_NOT_ACCEPTABLE);
    }

    #[test]
    fn test_invalid_json_bad_request() {
        let reply = handle(b"not json");
        assert_eq!(reply.status, STATUS_BAD_REQUEST);
    }

    #[test]
    fn test_missing_field_bad_request() {
        let reply = handle(br#"{"a": "only"}"#);
        assert_eq!(reply.status, STATUS_BAD_REQUEST);
    }
}
