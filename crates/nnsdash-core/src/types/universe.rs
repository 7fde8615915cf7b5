use crate::config::schema::NetworkConfig;
use candid::Principal;
use derive_more::Display;

///
/// UniverseKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum UniverseKind {
    Nns,
    Sns,
    CkBtc,
}

///
/// Universe
///
/// A ledger the dashboard can show: the home network, an SNS project
/// (identified by its root canister) or ckBTC.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Universe {
    pub id: Principal,
    pub kind: UniverseKind,
    pub ledger_canister_id: Principal,
    pub index_canister_id: Option<Principal>,
}

impl Universe {
    #[must_use]
    pub const fn nns(network: &NetworkConfig) -> Self {
        Self {
            id: network.own_canister_id,
            kind: UniverseKind::Nns,
            ledger_canister_id: network.icp_ledger_canister_id,
            index_canister_id: None,
        }
    }

    #[must_use]
    pub const fn sns(
        root_canister_id: Principal,
        ledger_canister_id: Principal,
        index_canister_id: Principal,
    ) -> Self {
        Self {
            id: root_canister_id,
            kind: UniverseKind::Sns,
            ledger_canister_id,
            index_canister_id: Some(index_canister_id),
        }
    }

    /// ckBTC universe, keyed by its ledger id, when configured.
    #[must_use]
    pub fn ckbtc(network: &NetworkConfig) -> Option<Self> {
        network.ckbtc_universe_canister_id.map(|ledger| Self {
            id: ledger,
            kind: UniverseKind::CkBtc,
            ledger_canister_id: ledger,
            index_canister_id: network.ckbtc_index_canister_id,
        })
    }

    #[must_use]
    pub fn is_nns(&self) -> bool {
        self.kind == UniverseKind::Nns
    }
}
