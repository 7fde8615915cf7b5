//! The application context.
//!
//! One [`AppContext`] per running dashboard. It owns the config, the stores
//! and the canister clients; services borrow it. Nothing here is global
//! except the log buffer.

use crate::{
    Error,
    api::{HardwareWallet, IcrcLedgerApi, LedgerIdentity, NnsDappApi, NnsGovernanceApi, SnsGovernanceApi},
    config::ConfigModel,
    i18n::I18n,
    log::LogBuffer,
    store::AppStores,
    types::{Identity, Principal, Universe},
};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::Rc,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

///
/// Clock
///

pub trait Clock {
    fn now_ms(&self) -> u64;
}

///
/// SystemClock
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

///
/// AppApis
/// Canister clients, supplied by the host.
///

#[derive(Clone)]
pub struct AppApis {
    pub icrc_ledger: Rc<dyn IcrcLedgerApi>,
    pub nns_dapp: Rc<dyn NnsDappApi>,
    pub sns_governance: Rc<dyn SnsGovernanceApi>,
    pub nns_governance: Rc<dyn NnsGovernanceApi>,
    pub hardware_wallet: Rc<dyn HardwareWallet>,
}

///
/// AppContext
///

pub struct AppContext {
    config: Arc<ConfigModel>,
    stores: AppStores,
    apis: AppApis,
    i18n: I18n,
    clock: Rc<dyn Clock>,

    // ledger identities by account identifier
    ledger_identities: RefCell<BTreeMap<String, Rc<dyn LedgerIdentity>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: Arc<ConfigModel>, apis: AppApis) -> Self {
        LogBuffer::set_capacity(usize::try_from(config.log.max_entries).unwrap_or(usize::MAX));

        Self {
            config,
            stores: AppStores::new(),
            apis,
            i18n: I18n::default(),
            clock: Rc::new(SystemClock),
            ledger_identities: RefCell::new(BTreeMap::new()),
        }
    }

    #[must_use]
    pub fn with_i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ConfigModel {
        &self.config
    }

    #[must_use]
    pub const fn stores(&self) -> &AppStores {
        &self.stores
    }

    #[must_use]
    pub const fn apis(&self) -> &AppApis {
        &self.apis
    }

    #[must_use]
    pub const fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The signed-in identity.
    pub fn identity(&self) -> Result<Identity, Error> {
        self.stores.auth.identity().ok_or(Error::NoIdentity)
    }

    #[must_use]
    pub fn nns_universe(&self) -> Universe {
        Universe::nns(&self.config.network)
    }

    /// ckBTC, when configured and enabled.
    #[must_use]
    pub fn ckbtc_universe(&self) -> Option<Universe> {
        if self.config.features.enable_ckbtc_ledger {
            Universe::ckbtc(&self.config.network)
        } else {
            None
        }
    }

    /// Any known universe by id.
    #[must_use]
    pub fn universe(&self, id: &Principal) -> Option<Universe> {
        let nns = self.nns_universe();
        if &nns.id == id {
            return Some(nns);
        }

        self.ckbtc_universe()
            .filter(|ckbtc| &ckbtc.id == id)
            .or_else(|| self.stores.universes.find(id))
    }

    pub(crate) const fn ledger_identities(&self) -> &RefCell<BTreeMap<String, Rc<dyn LedgerIdentity>>> {
        &self.ledger_identities
    }

    /// Forget cached hardware wallet identities.
    pub fn clear_ledger_identities(&self) {
        self.ledger_identities.borrow_mut().clear();
    }
}
