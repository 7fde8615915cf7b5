use crate::{
    store::Writable,
    types::{IcrcTransactionWithId, Principal},
};
use derive_more::Deref;
use std::collections::{BTreeMap, BTreeSet};

///
/// TransactionsData
/// The pages loaded so far for one account, newest first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionsData {
    pub transactions: Vec<IcrcTransactionWithId>,
    pub oldest_tx_id: Option<u64>,
    pub completed: bool,
}

/// Universe → account identifier → history.
pub type TransactionsState = BTreeMap<Principal, BTreeMap<String, TransactionsData>>;

///
/// TransactionsPage
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionsPage {
    pub universe_id: Principal,
    pub account_identifier: String,
    pub transactions: Vec<IcrcTransactionWithId>,
    pub oldest_tx_id: Option<u64>,
    pub completed: bool,
}

///
/// TransactionsStore
///

#[derive(Clone, Default, Deref)]
pub struct TransactionsStore(Writable<TransactionsState>);

impl TransactionsStore {
    /// Appends a page; transactions already present are kept once.
    pub fn add_transactions(&self, page: TransactionsPage) {
        self.update(|state| {
            let entry = state
                .entry(page.universe_id)
                .or_default()
                .entry(page.account_identifier)
                .or_default();

            let mut seen: BTreeSet<u64> = entry.transactions.iter().map(|tx| tx.id).collect();
            entry
                .transactions
                .extend(page.transactions.into_iter().filter(|tx| seen.insert(tx.id)));
            entry.transactions.sort_by(|a, b| b.id.cmp(&a.id));

            entry.oldest_tx_id = page.oldest_tx_id;
            entry.completed = page.completed;
        });
    }

    pub fn reset_universe(&self, universe_id: &Principal) {
        self.update(|state| {
            state.remove(universe_id);
        });
    }

    pub fn reset_account(&self, universe_id: &Principal, account_identifier: &str) {
        self.update(|state| {
            if let Some(accounts) = state.get_mut(universe_id) {
                accounts.remove(account_identifier);
            }
        });
    }

    #[must_use]
    pub fn account(&self, universe_id: &Principal, account_identifier: &str) -> Option<TransactionsData> {
        self.with(|state| state.get(universe_id)?.get(account_identifier).cloned())
    }
}

///
/// TESTS
///
