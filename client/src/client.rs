// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::Level::Trace;
use serde::Serialize;

use crate::json;
use crate::jsonrpc::{CallResult, Request};
use crate::params::{arg, normalize_params, opt_arg, Arg};
use crate::{Error, Result};

#[async_trait(?Send)]
pub trait RpcApi: Sized {
    /// The internal method to perform one request/response exchange.
    ///
    /// `params` must already be fully normalized; no elision happens
    /// here. When `call_id` is `None` the client picks the correlation
    /// id. Exactly one network round trip, no retry. An `error` field in
    /// the response is not a failure of this method: it comes back
    /// inside the envelope.
    async fn invoke<T: for<'a> serde::de::Deserialize<'a> + 'static>(
        &self,
        method: &str,
        params: &[serde_json::Value],
        call_id: Option<u64>,
    ) -> Result<CallResult<T>>;

    /// Call any RPC method the daemon exposes, with `help` for the full
    /// list of commands. Trailing optional arguments may be marked
    /// [Arg::Absent]; an absent slot followed by a present one fails with
    /// [Error::ArgumentOrder] before anything is sent.
    async fn call<T: for<'a> serde::de::Deserialize<'a> + 'static>(
        &self,
        method: &str,
        args: Vec<Arg>,
    ) -> Result<CallResult<T>> {
        let declared = args.len();
        let params = normalize_params(declared, args)?;
        self.invoke(method, &params, None).await
    }

    /// Returns an object containing various wallet state info.
    async fn get_wallet_info(&self) -> Result<CallResult<json::WalletInfo>> {
        self.call("getwalletinfo", vec![]).await
    }

    /// Returns a new Dash address for receiving payments.
    async fn get_new_address(&self) -> Result<CallResult<String>> {
        self.call("getnewaddress", vec![]).await
    }

    /// Returns the confirmed balance and total received for the given
    /// addresses, in duffs. Requires the daemon to run with the address
    /// index enabled.
    async fn get_address_balance(
        &self,
        addresses: &[&str],
    ) -> Result<CallResult<json::AddressBalance>> {
        #[derive(Serialize)]
        struct Argument<'a> {
            addresses: &'a [&'a str],
        }

        self.call("getaddressbalance", vec![arg(Argument {
            addresses,
        })?])
        .await
    }

    /// Send an amount to a given address. Returns the transaction id.
    ///
    /// `use_instant_send` and `use_private_send` select InstantSend
    /// delivery and anonymized funds respectively.
    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: Option<&str>,
        comment_to: Option<&str>,
        subtract_fee_from_amount: Option<bool>,
        use_instant_send: Option<bool>,
        use_private_send: Option<bool>,
    ) -> Result<CallResult<String>> {
        let args = vec![
            arg(address)?,
            arg(amount)?,
            opt_arg(comment)?,
            opt_arg(comment_to)?,
            opt_arg(subtract_fee_from_amount)?,
            opt_arg(use_instant_send)?,
            opt_arg(use_private_send)?,
        ];
        self.call("sendtoaddress", args).await
    }

    /// Returns the total available balance of the wallet in DASH.
    async fn get_balance(&self) -> Result<CallResult<f64>> {
        self.call("getbalance", vec![]).await
    }

    /// Set the transaction fee per kB. Returns true when accepted.
    async fn set_tx_fee(&self, amount: f64) -> Result<CallResult<bool>> {
        self.call("settxfee", vec![arg(amount)?]).await
    }

    /// Sign a message with the private key of an address.
    async fn sign_message(&self, address: &str, message: &str) -> Result<CallResult<String>> {
        self.call("signmessage", vec![arg(address)?, arg(message)?]).await
    }

    /// Verify a signed message.
    async fn verify_message(
        &self,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<CallResult<bool>> {
        let args = vec![arg(address)?, arg(signature)?, arg(message)?];
        self.call("verifymessage", args).await
    }

    /// Dump all wallet keys in a human-readable format to a server-side
    /// file.
    async fn dump_wallet(&self, filename: &str) -> Result<CallResult<()>> {
        self.call("dumpwallet", vec![arg(filename)?]).await
    }

    /// Import keys from a wallet dump file (see [RpcApi::dump_wallet]).
    async fn import_wallet(&self, filename: &str) -> Result<CallResult<()>> {
        self.call("importwallet", vec![arg(filename)?]).await
    }

    /// Estimate the fee per kB to get a transaction confirmed within
    /// `n_blocks`. Returns -1.0 when the daemon has no estimate.
    async fn estimate_fee(&self, n_blocks: u32) -> Result<CallResult<f64>> {
        self.call("estimatefee", vec![arg(n_blocks)?]).await
    }

    /// Like [RpcApi::estimate_fee], but falls back to the mempool minimum
    /// and reports the block the estimate was found at.
    async fn estimate_smart_fee(
        &self,
        n_blocks: u32,
    ) -> Result<CallResult<json::EstimateSmartFee>> {
        self.call("estimatesmartfee", vec![arg(n_blocks)?]).await
    }

    /// Returns the masternode list as a map from collateral outpoint to
    /// masternode status, optionally filtered by a substring of the
    /// outpoint, status or address.
    async fn masternode_list(
        &self,
        filter: Option<&str>,
    ) -> Result<CallResult<HashMap<String, json::MasternodeInfo>>> {
        let args = vec![arg("json")?, opt_arg(filter)?];
        self.call("masternodelist", args).await
    }

    /// Returns an object containing governance parameters.
    async fn get_governance_info(&self) -> Result<CallResult<json::GovernanceInfo>> {
        self.call("getgovernanceinfo", vec![]).await
    }

    /// Returns all governance objects known to the daemon, keyed by
    /// object hash.
    async fn gobject_list(
        &self,
    ) -> Result<CallResult<HashMap<String, json::GovernanceObject>>> {
        self.call("gobject", vec![arg("list")?]).await
    }
}

/// Client implements a JSON-RPC client for the Dash Core daemon or
/// compatible APIs.
///
/// The configuration is immutable after construction and the client keeps
/// no per-call state, so a single instance is safe to share across any
/// number of concurrent calls. Responses to concurrent calls may arrive
/// in any order.
pub struct Client {
    url: String,
    user: String,
    pass: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl Client {
    /// Creates a client to a dashd JSON-RPC server.
    pub fn new(url: String, user: String, pass: String) -> Self {
        Client {
            url,
            user,
            pass,
            http: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Next correlation id. Advisory: it matches a response to its
    /// request in logs, nothing more, and is not unique across clients.
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait(?Send)]
impl RpcApi for Client {
    async fn invoke<T: for<'a> serde::de::Deserialize<'a> + 'static>(
        &self,
        method: &str,
        params: &[serde_json::Value],
        call_id: Option<u64>,
    ) -> Result<CallResult<T>> {
        let id = match call_id {
            Some(id) => id,
            None => self.next_id(),
        };
        let req = Request {
            method,
            params,
            id,
        };
        if log_enabled!(Trace) {
            trace!("JSON-RPC request: {}", serde_json::to_string(&req)?);
        }

        let resp = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.pass))
            .json(&req)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        if log_enabled!(Trace) {
            trace!("JSON-RPC response: {}", String::from_utf8_lossy(&body));
        }

        match serde_json::from_slice::<CallResult<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            // dashd reports application errors with a non-success status
            // and the envelope in the body; only a status without an
            // envelope is a transport-level failure.
            Err(_) if !status.is_success() => Err(Error::HttpStatus(status)),
            Err(e) => Err(Error::Json(e)),
        }
    }
}
