//! Canister client seams.
//!
//! Every remote call the services make goes through one of these traits. The
//! agent-backed implementations live with the renderer; tests use the
//! testkit mocks. Reads take a [`RequestContext`] so the same request can be
//! issued as a query (`certified = false`) or as an update (`certified = true`).

pub mod governance;
pub mod hardware_wallet;
pub mod icrc_ledger;
pub mod nns_dapp;

pub use governance::{NnsGovernanceApi, SnsGovernanceApi};
pub use hardware_wallet::{HardwareWallet, LedgerAppVersion, LedgerError, LedgerIdentity};
pub use icrc_ledger::{GetTransactionsRequest, IcrcLedgerApi, IcrcTransferRequest};
pub use nns_dapp::{AccountDetails, HardwareWalletAccountDetails, NnsDappApi, SubAccountDetails};

use crate::types::Identity;
use thiserror::Error as ThisError;

///
/// ApiError
/// A rejected, failed or undecodable canister call.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// RequestContext
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestContext {
    pub identity: Identity,
    pub certified: bool,
}

impl RequestContext {
    #[must_use]
    pub const fn new(identity: Identity, certified: bool) -> Self {
        Self {
            identity,
            certified,
        }
    }

    #[must_use]
    pub const fn update(identity: Identity) -> Self {
        Self::new(identity, true)
    }
}
