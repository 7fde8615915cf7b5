use crate::{
    store::Writable,
    types::{IcrcTokenMetadata, Principal},
};
use derive_more::Deref;
use std::collections::BTreeMap;

///
/// TokenData
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenData {
    pub token: IcrcTokenMetadata,
    pub certified: bool,
}

pub type TokensState = BTreeMap<Principal, TokenData>;

///
/// TokensStore
/// Token metadata per universe, fetched once and cached.
///

#[derive(Clone, Default, Deref)]
pub struct TokensStore(Writable<TokensState>);

impl TokensStore {
    pub fn set_token(&self, universe_id: Principal, data: TokenData) {
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
    pub fn token(&self, universe_id: &Principal) -> Option<TokenData> {
        self.with(|state| state.get(universe_id).cloned())
    }
}
