use crate::{
    store::Writable,
    types::{Account, Principal},
};
use derive_more::Deref;
use std::collections::BTreeMap;

///
/// AccountsData
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountsData {
    pub accounts: Vec<Account>,
    pub certified: bool,
}

impl AccountsData {
    #[must_use]
    pub fn main(&self) -> Option<&Account> {
        self.accounts.iter().find(|account| account.is_main())
    }
}

pub type AccountsState = BTreeMap<Principal, AccountsData>;

///
/// AccountsStore
/// Accounts per universe.
///

#[derive(Clone, Default, Deref)]
pub struct AccountsStore(Writable<AccountsState>);

impl AccountsStore {
    pub fn set_accounts(&self, universe_id: Principal, data: AccountsData) {
        self.update(|state| {
            state.insert(universe_id, data);
        });
    }

    pub fn reset_universe(&self, universe_id: &Principal) {
        self.update(|state| {
            state.remove(universe_id);
        });
    }

    #[must_use]
    pub fn universe(&self, universe_id: &Principal) -> Option<AccountsData> {
        self.with(|state| state.get(universe_id).cloned())
    }

    /// Account with `identifier` in `universe_id`.
    #[must_use]
    pub fn find(&self, universe_id: &Principal, identifier: &str) -> Option<Account> {
        self.with(|state| {
            state
                .get(universe_id)?
                .accounts
                .iter()
                .find(|account| account.identifier == identifier)
                .cloned()
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::Readable,
        test::support::p,
        types::{Token, TokenAmount},
    };

    fn data(owner: Principal, e8s: u64, certified: bool) -> AccountsData {
        AccountsData {
            accounts: vec![Account::icrc_main(owner, TokenAmount::from_e8s(e8s, Token::icp()))],
            certified,
        }
    }

    #[test]
    fn universes_are_independent() {
        let store = AccountsStore::default();
        store.set_accounts(p(1), data(p(9), 10, true));
        store.set_accounts(p(2), data(p(9), 20, false));

        store.reset_universe(&p(1));

        assert!(store.universe(&p(1)).is_none());
        let other = store.universe(&p(2)).unwrap();
        assert_eq!(other.main().unwrap().balance.to_e8s(), 20);
        assert_eq!(store.get().len(), 1);
    }

    #[test]
    fn find_by_identifier() {
        let store = AccountsStore::default();
        let accounts = data(p(9), 10, true);
        let identifier = accounts.accounts[0].identifier.clone();
        store.set_accounts(p(1), accounts);

        assert!(store.find(&p(1), &identifier).is_some());
        assert!(store.find(&p(2), &identifier).is_none());
        assert!(store.find(&p(1), "nope").is_none());
    }
}
