use super::{ConfigSchemaError, Validate};
use candid::Principal;
use serde::{Deserialize, Serialize};

///
/// Defaults
/// Mainnet NNS canister ids.
///

mod defaults {
    use candid::Principal;

    // qoctq-giaaa-aaaaa-aaaea-cai
    pub fn own_canister_id() -> Principal {
        Principal::from_slice(&[0, 0, 0, 0, 0, 0, 0, 8, 1, 1])
    }

    // ryjl3-tyaaa-aaaaa-aaaba-cai
    pub fn icp_ledger_canister_id() -> Principal {
        Principal::from_slice(&[0, 0, 0, 0, 0, 0, 0, 2, 1, 1])
    }

    pub fn dfx_network() -> String {
        "mainnet".to_string()
    }

    pub fn host() -> String {
        "https://icp-api.io".to_string()
    }
}

///
/// NetworkConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// The dashboard's own canister; doubles as the home-network universe id.
    #[serde(default = "defaults::own_canister_id")]
    pub own_canister_id: Principal,

    #[serde(default = "defaults::icp_ledger_canister_id")]
    pub icp_ledger_canister_id: Principal,

    #[serde(default)]
    pub ckbtc_universe_canister_id: Option<Principal>,

    #[serde(default)]
    pub ckbtc_index_canister_id: Option<Principal>,

    #[serde(default = "defaults::dfx_network")]
    pub dfx_network: String,

    #[serde(default = "defaults::host")]
    pub host: String,

    #[serde(default)]
    pub fetch_root_key: bool,
}

impl NetworkConfig {
    #[must_use]
    pub fn is_testnet(&self) -> bool {
        self.dfx_network != "mainnet" && self.fetch_root_key && !self.host.contains(".ic0.app")
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            own_canister_id: defaults::own_canister_id(),
            icp_ledger_canister_id: defaults::icp_ledger_canister_id(),
            ckbtc_universe_canister_id: None,
            ckbtc_index_canister_id: None,
            dfx_network: defaults::dfx_network(),
            host: defaults::host(),
            fetch_root_key: false,
        }
    }
}

impl Validate for NetworkConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.host.is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "network.host must not be empty".to_string(),
            ));
        }

        if self.ckbtc_index_canister_id.is_some() && self.ckbtc_universe_canister_id.is_none() {
            return Err(ConfigSchemaError::ValidationError(
                "network.ckbtc_index_canister_id requires ckbtc_universe_canister_id".to_string(),
            ));
        }

        Ok(())
    }
}
