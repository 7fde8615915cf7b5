use async_trait::async_trait;
use nnsdash_core::{
    api::{HardwareWallet, LedgerAppVersion, LedgerError, LedgerIdentity},
    types::Principal,
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

///
/// MockLedgerIdentity
///

#[derive(Debug)]
pub struct MockLedgerIdentity {
    principal: Principal,
    version: LedgerAppVersion,
    pub show_error: RefCell<Option<LedgerError>>,
    pub shown: Cell<usize>,
}

impl MockLedgerIdentity {
    #[must_use]
    pub fn new(principal: Principal) -> Self {
        Self::with_version(principal, LedgerAppVersion::new(2, 4, 9))
    }

    #[must_use]
    pub fn with_version(principal: Principal, version: LedgerAppVersion) -> Self {
        Self {
            principal,
            version,
            show_error: RefCell::new(None),
            shown: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl LedgerIdentity for MockLedgerIdentity {
    fn principal(&self) -> Principal {
        self.principal
    }

    async fn show_address_and_pub_key_on_device(&self) -> Result<(), LedgerError> {
        if let Some(err) = self.show_error.borrow().clone() {
            return Err(err);
        }
        self.shown.set(self.shown.get() + 1);

        Ok(())
    }

    async fn version(&self) -> Result<LedgerAppVersion, LedgerError> {
        Ok(self.version)
    }
}

///
/// MockHardwareWallet
/// Hands out queued identities, then the default one.
///

pub struct MockHardwareWallet {
    default: RefCell<Result<Rc<MockLedgerIdentity>, LedgerError>>,
    queued: RefCell<VecDeque<Result<Rc<MockLedgerIdentity>, LedgerError>>>,
    pub created: Cell<usize>,
}

impl MockHardwareWallet {
    #[must_use]
    pub fn new(identity: Rc<MockLedgerIdentity>) -> Self {
        Self {
            default: RefCell::new(Ok(identity)),
            queued: RefCell::new(VecDeque::new()),
            created: Cell::new(0),
        }
    }

    pub fn set_default(&self, outcome: Result<Rc<MockLedgerIdentity>, LedgerError>) {
        *self.default.borrow_mut() = outcome;
    }

    pub fn push(&self, outcome: Result<Rc<MockLedgerIdentity>, LedgerError>) {
        self.queued.borrow_mut().push_back(outcome);
    }
}

#[async_trait(?Send)]
impl HardwareWallet for MockHardwareWallet {
    async fn create(&self) -> Result<Rc<dyn LedgerIdentity>, LedgerError> {
        self.created.set(self.created.get() + 1);

        let outcome = self
            .queued
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.default.borrow().clone());

        outcome.map(|identity| identity as Rc<dyn LedgerIdentity>)
    }
}
