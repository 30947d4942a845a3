//! # Rust structs for the Dash Core API
//!
//! This is the result-type companion crate for the dashd JSON-RPC client.
//! Every struct here mirrors the JSON shape a dashd procedure answers
//! with. The daemon is free to add or omit fields between versions, so
//! fields that older or newer daemons drop are `Option`s; nothing here
//! validates beyond what serde needs to fill the struct.

#![crate_name = "dashd_rpc_json"]
#![crate_type = "rlib"]

use serde::{Deserialize, Serialize};

/// Result of the `getwalletinfo` call.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct WalletInfo {
    /// The wallet version.
    #[serde(rename = "walletversion")]
    pub wallet_version: u64,
    /// The total confirmed balance of the wallet in DASH.
    pub balance: f64,
    /// The anonymized balance of the wallet in DASH. Not reported by
    /// wallets running with PrivateSend disabled.
    #[serde(default)]
    pub privatesend_balance: Option<f64>,
    /// The total unconfirmed balance of the wallet in DASH.
    pub unconfirmed_balance: f64,
    /// The total immature balance of the wallet in DASH.
    pub immature_balance: f64,
    /// The total number of transactions in the wallet.
    #[serde(rename = "txcount")]
    pub tx_count: u64,
    /// Timestamp (seconds since Unix epoch) of the oldest pre-generated
    /// key in the key pool.
    #[serde(rename = "keypoololdest")]
    pub keypool_oldest: u64,
    /// How many new keys are pre-generated (only counts external keys).
    #[serde(rename = "keypoolsize")]
    pub keypool_size: u64,
    /// How many new keys are pre-generated for internal use. Only appears
    /// if the wallet uses change-output keys.
    #[serde(rename = "keypoolsize_hd_internal", default)]
    pub keypool_size_hd_internal: Option<u64>,
    /// How many new keys are left since the last automatic backup.
    pub keys_left: u64,
    /// The transaction fee configuration, in DASH/kB.
    #[serde(rename = "paytxfee")]
    pub pay_tx_fee: f64,
}


/// Result of the `getaddressbalance` call.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddressBalance {
    /// The current confirmed balance in duffs.
    pub balance: f64,
    /// The total amount ever received in duffs.
    pub received: f64,
}

/// Result of the `estimatesmartfee` call.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct EstimateSmartFee {
    /// Estimated fee rate in DASH/kB. Absent when the daemon has not
    /// gathered enough data to produce an estimate.
    #[serde(default)]
    pub feerate: Option<f64>,
    /// Errors encountered during processing.
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    /// Block number where the estimate was found.
    pub blocks: i64,
}

/// One entry of the map returned by the `masternodelist` call in `json`
/// mode, keyed by the masternode's collateral outpoint.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MasternodeInfo {
    /// IP address and port of the masternode.
    pub address: String,
    /// The address the masternode is paid to.
    pub payee: String,
    /// Status string, e.g. `ENABLED` or `POSE_BANNED`.
    pub status: String,
    /// Protocol version spoken by the masternode.
    #[serde(default)]
    pub protocol: Option<u32>,
    /// Timestamp of the last time the masternode was seen.
    #[serde(rename = "lastseen", default)]
    pub last_seen: Option<u64>,
    /// Seconds the masternode has been active.
    #[serde(rename = "activeseconds", default)]
    pub active_seconds: Option<i64>,
    /// Timestamp of the last block reward paid to this masternode.
    #[serde(rename = "lastpaidtime", default)]
    pub last_paid_time: Option<u64>,
    /// Height of the last block that paid this masternode.
    #[serde(rename = "lastpaidblock", default)]
    pub last_paid_block: Option<u64>,
    /// Owner key address (deterministic masternodes only).
    #[serde(rename = "owneraddress", default)]
    pub owner_address: Option<String>,
    /// Voting key address (deterministic masternodes only).
    #[serde(rename = "votingaddress", default)]
    pub voting_address: Option<String>,
    /// Collateral payout address (deterministic masternodes only).
    #[serde(rename = "collateraladdress", default)]
    pub collateral_address: Option<String>,
}

#[cfg(test)]
mod masternode_info_tests {
    use super::*;

    #[test]
    fn test_deserialize_masternode_info() {
        let json_data = r#"
            {
              "address": "140.82.59.51:10004",
              "payee": "yYe1XJqR4YsDTBQZJZoN2WHPnLHgptLtjC",
              "status": "ENABLED",
              "lastpaidtime": 1553387121,
              "lastpaidblock": 49202,
              "owneraddress": "yT9dkHoMD2a3sG5DFTxlBSCSo7N9uaYANp",
              "votingaddress": "yTMzQdE3tDQ3UVpPHA7XvSDBHNx1q3cSgX"
            }
        "#;

        let result: MasternodeInfo = serde_json::from_str(json_data).unwrap();

        assert_eq!(result.address, "140.82.59.51:10004");
        assert_eq!(result.status, "ENABLED");
        assert_eq!(result.protocol, None);
        assert_eq!(result.last_paid_block, Some(49202));
    }
}

/// Result of the `getgovernanceinfo` call.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct GovernanceInfo {
    /// Absolute minimum number of votes needed to trigger a governance
    /// action.
    #[serde(rename = "governanceminquorum")]
    pub governance_min_quorum: u64,
    /// The collateral fee required for a proposal, in DASH.
    #[serde(rename = "proposalfee")]
    pub proposal_fee: f64,
    /// The number of blocks between superblocks.
    #[serde(rename = "superblockcycle")]
    pub superblock_cycle: u64,
    /// The height of the next superblock.
    #[serde(rename = "nextsuperblock")]
    pub next_superblock: u64,
    /// The height of the last superblock.
    #[serde(rename = "lastsuperblock", default)]
    pub last_superblock: Option<u64>,
    /// Sentinel watchdog expiration, dropped by newer daemons.
    #[serde(rename = "masternodewatchdogmaxseconds", default)]
    pub masternode_watchdog_max_seconds: Option<u64>,
    /// The budget available to the next superblock, in DASH.
    #[serde(rename = "governancebudget", default)]
    pub governance_budget: Option<f64>,
}

#[cfg(test)]
mod governance_info_tests {
    use super::*;

    #[test]
    fn test_deserialize_governance_info() {
        let json_data = r#"
            {
              "governanceminquorum": 10,
              "proposalfee": 5.0,
              "superblockcycle": 24,
              "nextsuperblock": 57888,
              "lastsuperblock": 57864
            }
        "#;

        let result: GovernanceInfo = serde_json::from_str(json_data).unwrap();

        assert_eq!(result.governance_min_quorum, 10);
        assert_eq!(result.proposal_fee, 5.0);
        assert_eq!(result.superblock_cycle, 24);
        assert_eq!(result.next_superblock, 57888);
        assert_eq!(result.masternode_watchdog_max_seconds, None);
    }
}

/// One entry of the map returned by `gobject list`, keyed by the
/// governance object hash.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct GovernanceObject {
    #[serde(rename = "DataHex", default)]
    pub data_hex: Option<String>,
    #[serde(rename = "DataString", default)]
    pub data_string: Option<String>,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "CollateralHash", default)]
    pub collateral_hash: Option<String>,
    #[serde(rename = "ObjectType")]
    pub object_type: u32,
    #[serde(rename = "CreationTime")]
    pub creation_time: u64,
    #[serde(rename = "AbsoluteYesCount")]
    pub absolute_yes_count: i64,
    #[serde(rename = "YesCount")]
    pub yes_count: i64,
    #[serde(rename = "NoCount")]
    pub no_count: i64,
    #[serde(rename = "AbstainCount")]
    pub abstain_count: i64,
    #[serde(rename = "fBlockchainValidity", default)]
    pub blockchain_validity: Option<bool>,
    #[serde(rename = "IsValidReason", default)]
    pub is_valid_reason: Option<String>,
    #[serde(rename = "fCachedValid", default)]
    pub cached_valid: Option<bool>,
    #[serde(rename = "fCachedFunding", default)]
    pub cached_funding: Option<bool>,
    #[serde(rename = "fCachedDelete", default)]
    pub cached_delete: Option<bool>,
    #[serde(rename = "fCachedEndorsed", default)]
    pub cached_endorsed: Option<bool>,
}

#[cfg(test)]
mod governance_object_tests {
    use super::*;

    #[test]
    fn test_deserialize_governance_object() {
        let json_data = r#"
            {
              "DataString": "[[\"proposal\", {}]]",
              "Hash": "21af004754d57660a5b83818b26263699b9e25c53a46395b7386e786d1644c27",
              "CollateralHash": "af806b22d8e7a3bca9a3b0fc5dea5b8a6748d5f6f68e7f2a6e5a8fce8b05ed1e",
              "ObjectType": 1,
              "CreationTime": 1553113699,
              "AbsoluteYesCount": 44,
              "YesCount": 46,
              "NoCount": 2,
              "AbstainCount": 0,
              "fBlockchainValidity": true,
              "IsValidReason": "",
              "fCachedValid": true,
              "fCachedFunding": false,
              "fCachedDelete": false,
              "fCachedEndorsed": false
            }
        "#;

        let result: GovernanceObject = serde_json::from_str(json_data).unwrap();

        assert_eq!(result.object_type, 1);
        assert_eq!(result.absolute_yes_count, 44);
        assert_eq!(result.blockchain_validity, Some(true));
        assert_eq!(result.data_hex, None);
    }
}
