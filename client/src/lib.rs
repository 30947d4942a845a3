// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Rust Client for Dash Core API
//!
//! This is a client library for the Dash Core JSON-RPC API.
//!

#![crate_name = "dashd_rpc"]
#![crate_type = "rlib"]

#[macro_use]
extern crate log;

pub extern crate dashd_rpc_json;
pub use dashd_rpc_json as json;

mod client;
pub use client::*;

mod jsonrpc;
pub use jsonrpc::{CallResult, Request, RpcError};

mod params;
pub use params::{arg, normalize_params, opt_arg, Arg};

mod error;
pub use error::Error;

/// Crate-specific Result type, shorthand for `std::result::Result` with our
/// crate-specific Error type;
pub type Result<T> = std::result::Result<T, Error>;
