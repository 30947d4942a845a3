// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

use std::{error, fmt};

use crate::jsonrpc::RpcError;

/// The error type for errors produced in this library.
#[derive(Debug)]
pub enum Error {
    /// A present positional argument follows an omitted one. Raised before
    /// anything is sent: positional JSON-RPC has no way to address a
    /// parameter across a gap.
    ArgumentOrder {
        /// Index of the first omitted argument.
        absent: usize,
        /// Index of the offending present argument.
        present: usize,
    },
    /// The HTTP round trip could not be completed.
    Transport(reqwest::Error),
    /// The server answered with a non-success status and a body that is
    /// not a response envelope.
    HttpStatus(reqwest::StatusCode),
    /// Request serialization or response envelope decoding failed.
    Json(serde_json::error::Error),
    /// An application-level error returned by the daemon. Only produced
    /// by [crate::CallResult::into_result]; `invoke` passes the error
    /// field through in the envelope instead.
    Rpc(RpcError),
    /// The envelope carried neither a result nor an error.
    EmptyEnvelope,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Transport(e)
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(e: serde_json::error::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ArgumentOrder {
                absent,
                present,
            } => write!(
                f,
                "argument at index {} provided after omitted argument at index {}",
                present, absent
            ),
            Error::Transport(ref e) => write!(f, "transport error: {}", e),
            Error::HttpStatus(ref s) => write!(f, "unexpected HTTP status: {}", s),
            Error::Json(ref e) => write!(f, "JSON error: {}", e),
            Error::Rpc(ref e) => write!(f, "daemon error: {}", e),
            Error::EmptyEnvelope => write!(f, "response carried neither result nor error"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Transport(ref e) => Some(e),
            Error::Json(ref e) => Some(e),
            _ => None,
        }
    }
}
