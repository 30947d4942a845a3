// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! The request/response envelopes exchanged with dashd. The daemon speaks
//! the pre-2.0 wire form: no `jsonrpc` version field, positional params,
//! integer ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A JSON-RPC request object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request<'a, 'b> {
    /// The name of the RPC call.
    pub method: &'a str,
    /// Parameters to the RPC call, already normalized: no omitted slots.
    pub params: &'b [serde_json::Value],
    /// Identifier for this request, echoed in the response. Advisory
    /// only; the client does not verify the echo.
    pub id: u64,
}

/// A JSON-RPC response envelope.
///
/// A well-behaved daemon populates exactly one of `result` and `error`,
/// but that is not enforced anywhere: a populated `error` means the call
/// failed, whatever `result` holds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CallResult<T> {
    /// The procedure result, if the daemon produced one.
    #[serde(default)]
    pub result: Option<T>,
    /// The daemon-defined error, passed through verbatim.
    #[serde(default)]
    pub error: Option<RpcError>,
    /// Identifier echoed from the request.
    pub id: u64,
}

impl<T> CallResult<T> {
    /// Collapse the envelope into the result it carries, treating a
    /// populated `error` field as authoritative failure.
    pub fn into_result(self) -> Result<T> {
        if let Some(e) = self.error {
            return Err(Error::Rpc(e));
        }
        self.result.ok_or(Error::EmptyEnvelope)
    }
}

/// An application-level error returned by the daemon, e.g. for an invalid
/// address or insufficient funds. Interpreting `code` is the caller's
/// business.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RPC error {}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_form() {
        let params = [serde_json::Value::from("yhP37ynu9Nyn7hZq9Vzm4tWrCkXdfZqB7S"), 0.25.into()];
        let req = Request {
            method: "sendtoaddress",
            params: &params,
            id: 7,
        };

        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "method": "sendtoaddress",
                "params": ["yhP37ynu9Nyn7hZq9Vzm4tWrCkXdfZqB7S", 0.25],
                "id": 7,
            })
        );
    }

    #[test]
    fn test_result_envelope() {
        let resp: CallResult<u64> =
            serde_json::from_str(r#"{"result": 1057102, "error": null, "id": 3}"#).unwrap();
        assert_eq!(resp.result, Some(1057102));
        assert!(resp.error.is_none());
        assert_eq!(resp.id, 3);
        assert_eq!(resp.into_result().unwrap(), 1057102);
    }

    #[test]
    fn test_error_envelope() {
        let resp: CallResult<String> = serde_json::from_str(
            r#"{"result": null, "error": {"code": -5, "message": "Invalid address"}, "id": 3}"#,
        )
        .unwrap();
        assert!(resp.result.is_none());
        assert_eq!(resp.error.as_ref().unwrap().code, -5);

        match resp.into_result() {
            Err(Error::Rpc(e)) => assert_eq!(e.message, "Invalid address"),
            other => panic!("expected daemon error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_wins_over_result() {
        // A misbehaving daemon may populate both fields; error is
        // authoritative.
        let resp: CallResult<u64> = serde_json::from_str(
            r#"{"result": 21, "error": {"code": -1, "message": "broken"}, "id": 1}"#,
        )
        .unwrap();
        assert!(matches!(resp.into_result(), Err(Error::Rpc(_))));
    }

    #[test]
    fn test_empty_envelope() {
        let resp: CallResult<u64> = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(matches!(resp.into_result(), Err(Error::EmptyEnvelope)));
    }
}
