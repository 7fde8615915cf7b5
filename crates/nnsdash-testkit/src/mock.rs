//! Scriptable canister mocks.
//!
//! Each mocked endpoint owns a [`Replies`] queue per branch (query and
//! update). A reply is either ready or gated behind a oneshot channel the
//! test resolves whenever it wants, which is how tests pick the order in
//! which the query and update branches land.

use async_trait::async_trait;
use futures::channel::oneshot;
use icrc_ledger_types::icrc1::transfer::TransferArg;
use nnsdash_core::{
    Error,
    api::{
        AccountDetails, ApiError, GetTransactionsRequest, IcrcLedgerApi, NnsDappApi,
        NnsGovernanceApi, RequestContext, SnsGovernanceApi,
    },
    wire::icrc::IcrcTokenMetadataResponse,
    types::{GetTransactions, IcrcAccount, Identity, NeuronInfo, Principal, SnsNeuron},
};
use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    rc::Rc,
};

type Outcome<T> = Result<T, Error>;

enum Reply<T> {
    Ready(Outcome<T>),
    Gated(oneshot::Receiver<Outcome<T>>),
}

///
/// Replies
///

pub struct Replies<T> {
    query: RefCell<VecDeque<Reply<T>>>,
    update: RefCell<VecDeque<Reply<T>>>,
    fallback: RefCell<Option<Outcome<T>>>,
    calls: RefCell<Vec<RequestContext>>,
}

impl<T> Default for Replies<T> {
    fn default() -> Self {
        Self {
            query: RefCell::new(VecDeque::new()),
            update: RefCell::new(VecDeque::new()),
            fallback: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> Replies<T> {
    /// Reply used once the per-branch queues are empty.
    pub fn always(&self, outcome: Outcome<T>) {
        *self.fallback.borrow_mut() = Some(outcome);
    }

    pub fn push(&self, certified: bool, outcome: Outcome<T>) {
        self.queue(certified).borrow_mut().push_back(Reply::Ready(outcome));
    }

    /// Queue a held-back reply; the call completes when the sender fires.
    #[must_use]
    pub fn gate(&self, certified: bool) -> oneshot::Sender<Outcome<T>> {
        let (tx, rx) = oneshot::channel();
        self.queue(certified).borrow_mut().push_back(Reply::Gated(rx));

        tx
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RequestContext> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn call_count(&self, certified: bool) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|ctx| ctx.certified == certified)
            .count()
    }

    pub async fn next(&self, ctx: RequestContext) -> Outcome<T> {
        self.calls.borrow_mut().push(ctx);

        let reply = self.queue(ctx.certified).borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(outcome)) => outcome,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::new("gate dropped").into())),
            None => self
                .fallback
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(ApiError::new("no reply scripted").into())),
        }
    }

    const fn queue(&self, certified: bool) -> &RefCell<VecDeque<Reply<T>>> {
        if certified { &self.update } else { &self.query }
    }
}

/// Replies keyed by canister id.
pub struct RepliesByCanister<T>(RefCell<BTreeMap<Principal, Rc<Replies<T>>>>);

impl<T> Default for RepliesByCanister<T> {
    fn default() -> Self {
        Self(RefCell::new(BTreeMap::new()))
    }
}

impl<T: Clone> RepliesByCanister<T> {
    #[must_use]
    pub fn of(&self, canister_id: Principal) -> Rc<Replies<T>> {
        Rc::clone(self.0.borrow_mut().entry(canister_id).or_default())
    }
}

///
/// MockIcrcLedger
///

#[derive(Default)]
pub struct MockIcrcLedger {
    pub balances: RepliesByCanister<u64>,
    pub metadata: RepliesByCanister<IcrcTokenMetadataResponse>,
    pub transfers: Replies<u64>,
    pub transactions: RepliesByCanister<GetTransactions>,

    pub balance_requests: RefCell<Vec<IcrcAccount>>,
    pub transfer_args: RefCell<Vec<TransferArg>>,
    pub transaction_requests: RefCell<Vec<GetTransactionsRequest>>,
}

#[async_trait(?Send)]
impl IcrcLedgerApi for MockIcrcLedger {
    async fn balance(
        &self,
        ctx: RequestContext,
        ledger_canister_id: Principal,
        account: IcrcAccount,
    ) -> Result<u64, Error> {
        self.balance_requests.borrow_mut().push(account);
        self.balances.of(ledger_canister_id).next(ctx).await
    }

    async fn metadata(
        &self,
        ctx: RequestContext,
        ledger_canister_id: Principal,
    ) -> Result<IcrcTokenMetadataResponse, Error> {
        self.metadata.of(ledger_canister_id).next(ctx).await
    }

    async fn transfer(
        &self,
        ctx: RequestContext,
        _ledger_canister_id: Principal,
        arg: TransferArg,
    ) -> Result<u64, Error> {
        self.transfer_args.borrow_mut().push(arg);
        self.transfers.next(ctx).await
    }

    async fn transactions(
        &self,
        ctx: RequestContext,
        index_canister_id: Principal,
        request: GetTransactionsRequest,
    ) -> Result<GetTransactions, Error> {
        self.transaction_requests.borrow_mut().push(request);
        self.transactions.of(index_canister_id).next(ctx).await
    }
}

///
/// MockNnsDapp
///

#[derive(Default)]
pub struct MockNnsDapp {
    pub accounts: Replies<AccountDetails>,
    pub register_reply: RefCell<Option<Error>>,
    pub registered: RefCell<Vec<(Identity, String, Principal)>>,
}

#[async_trait(?Send)]
impl NnsDappApi for MockNnsDapp {
    async fn get_account(&self, ctx: RequestContext) -> Result<AccountDetails, Error> {
        self.accounts.next(ctx).await
    }

    async fn register_hardware_wallet(
        &self,
        identity: Identity,
        name: String,
        principal: Principal,
    ) -> Result<(), Error> {
        self.registered.borrow_mut().push((identity, name, principal));

        match self.register_reply.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

///
/// MockSnsGovernance
///

#[derive(Default)]
pub struct MockSnsGovernance {
    pub neurons: RepliesByCanister<Vec<SnsNeuron>>,
}

#[async_trait(?Send)]
impl SnsGovernanceApi for MockSnsGovernance {
    async fn query_neurons(
        &self,
        ctx: RequestContext,
        root_canister_id: Principal,
    ) -> Result<Vec<SnsNeuron>, Error> {
        self.neurons.of(root_canister_id).next(ctx).await
    }
}

///
/// MockNnsGovernance
///

#[derive(Default)]
pub struct MockNnsGovernance {
    pub neurons: Replies<Vec<NeuronInfo>>,
}

#[async_trait(?Send)]
impl NnsGovernanceApi for MockNnsGovernance {
    async fn query_neurons(&self, ctx: RequestContext) -> Result<Vec<NeuronInfo>, Error> {
        self.neurons.next(ctx).await
    }
}

///
/// TESTS
///
