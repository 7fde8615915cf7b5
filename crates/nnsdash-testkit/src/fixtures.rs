//! Ready-made contexts and records.

use crate::{
    Fake,
    clock::ManualClock,
    ledger::{MockHardwareWallet, MockLedgerIdentity},
    mock::{MockIcrcLedger, MockNnsDapp, MockNnsGovernance, MockSnsGovernance},
};
use candid::Nat;
use nnsdash_core::{
    AppContext,
    api::{AccountDetails, HardwareWalletAccountDetails, SubAccountDetails},
    config::{Config, ConfigModel},
    context::AppApis,
    wire::icrc::{IcrcMetadataKey, IcrcTokenMetadataResponse, MetadataValue},
    types::{
        DissolveState, Identity, IcrcTransaction, IcrcTransactionWithId, NeuronId,
        NeuronPermission, Principal, SnsNeuron, SnsNeuronPermissionType, Universe,
    },
    utils::account_identifier::principal_to_account_identifier,
};
use std::{ops::Deref, rc::Rc};

pub const NOW_MS: u64 = 1_700_000_000_000;

///
/// TestEnv
///
/// An [`AppContext`] wired to mocks, signed in as `Fake::identity(1)`.
/// Derefs to the context.
///

pub struct TestEnv {
    pub ctx: AppContext,
    pub ledger: Rc<MockIcrcLedger>,
    pub nns_dapp: Rc<MockNnsDapp>,
    pub sns_governance: Rc<MockSnsGovernance>,
    pub nns_governance: Rc<MockNnsGovernance>,
    pub hardware_wallet: Rc<MockHardwareWallet>,
    pub ledger_identity: Rc<MockLedgerIdentity>,
    pub clock: Rc<ManualClock>,
}

impl TestEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ConfigModel::default())
    }

    /// # Panics
    /// If `config` does not validate.
    #[must_use]
    pub fn with_config(config: ConfigModel) -> Self {
        let config = Config::from_model(config).expect("test config must validate");

        let ledger = Rc::new(MockIcrcLedger::default());
        let nns_dapp = Rc::new(MockNnsDapp::default());
        let sns_governance = Rc::new(MockSnsGovernance::default());
        let nns_governance = Rc::new(MockNnsGovernance::default());
        let ledger_identity = Rc::new(MockLedgerIdentity::new(Fake::principal(500)));
        let hardware_wallet = Rc::new(MockHardwareWallet::new(Rc::clone(&ledger_identity)));
        let clock = Rc::new(ManualClock::new(NOW_MS));

        let apis = AppApis {
            icrc_ledger: ledger.clone(),
            nns_dapp: nns_dapp.clone(),
            sns_governance: sns_governance.clone(),
            nns_governance: nns_governance.clone(),
            hardware_wallet: hardware_wallet.clone(),
        };

        let ctx = AppContext::new(config, apis).with_clock(clock.clone());
        ctx.stores().auth.sign_in(Self::identity());

        Self {
            ctx,
            ledger,
            nns_dapp,
            sns_governance,
            nns_governance,
            hardware_wallet,
            ledger_identity,
            clock,
        }
    }

    #[must_use]
    pub fn identity() -> Identity {
        Fake::identity(1)
    }

    /// Registers an SNS project and returns its universe.
    #[must_use]
    pub fn add_sns(&self, seed: u32) -> Universe {
        let universe = mock_sns_universe(seed);
        self.ctx.stores().universes.upsert([universe]);

        universe
    }

    /// Toast texts, oldest first.
    #[must_use]
    pub fn toast_texts(&self) -> Vec<String> {
        self.ctx
            .stores()
            .toasts
            .with(|toasts| toasts.iter().map(|t| t.text.clone()).collect())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TestEnv {
    type Target = AppContext;

    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

/// A project whose root, ledger and index ids derive from `seed`.
#[must_use]
pub fn mock_sns_universe(seed: u32) -> Universe {
    Universe::sns(
        Fake::principal(seed),
        Fake::principal(seed + 1),
        Fake::principal(seed + 2),
    )
}

#[must_use]
pub fn mock_token_metadata(name: &str, symbol: &str, fee: u64) -> IcrcTokenMetadataResponse {
    vec![
        (IcrcMetadataKey::NAME.to_string(), MetadataValue::Text(name.to_string())),
        (IcrcMetadataKey::SYMBOL.to_string(), MetadataValue::Text(symbol.to_string())),
        (IcrcMetadataKey::FEE.to_string(), MetadataValue::Nat(Nat::from(fee))),
        (IcrcMetadataKey::DECIMALS.to_string(), MetadataValue::Nat(Nat::from(8_u64))),
    ]
}

#[must_use]
pub fn mock_transaction(id: u64) -> IcrcTransactionWithId {
    IcrcTransactionWithId {
        id,
        transaction: IcrcTransaction {
            kind: "transfer".to_string(),
            timestamp: 1_700_000_000_000_000_000 + id,
            burn: None,
            mint: None,
            transfer: None,
            approve: None,
        },
    }
}

/// A locked neuron controlled by `controller`, created at `created`.
#[must_use]
pub fn mock_sns_neuron(id: u8, controller: Principal, created: u64) -> SnsNeuron {
    SnsNeuron {
        id: Some(NeuronId { id: vec![id; 4] }),
        permissions: vec![NeuronPermission::new(controller, SnsNeuronPermissionType::ALL)],
        cached_neuron_stake_e8s: 1_000_000_000,
        created_timestamp_seconds: created,
        aging_since_timestamp_seconds: created,
        dissolve_state: Some(DissolveState::DissolveDelaySeconds(15_778_800)),
        voting_power_percentage_multiplier: 100,
        ..SnsNeuron::default()
    }
}

/// The dashboard record of `owner` with one subaccount and one hardware wallet.
#[must_use]
pub fn mock_account_details(owner: Principal, hardware_wallet: Principal) -> AccountDetails {
    let mut sub = [0u8; 32];
    sub[31] = 1;

    AccountDetails {
        principal: owner,
        account_identifier: principal_to_account_identifier(&owner, None),
        sub_accounts: vec![SubAccountDetails {
            name: "savings".to_string(),
            sub_account: sub,
            account_identifier: principal_to_account_identifier(&owner, Some(&sub)),
        }],
        hardware_wallet_accounts: vec![HardwareWalletAccountDetails {
            name: "nano".to_string(),
            principal: hardware_wallet,
            account_identifier: principal_to_account_identifier(&hardware_wallet, None),
        }],
    }
}
