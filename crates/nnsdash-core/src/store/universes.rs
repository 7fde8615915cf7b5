use crate::{
    store::Writable,
    types::{Principal, Universe},
};
use derive_more::Deref;

///
/// UniversesStore
/// Universes known besides the home network (SNS projects, ckBTC).
///

#[derive(Clone, Default, Deref)]
pub struct UniversesStore(Writable<Vec<Universe>>);

impl UniversesStore {
    /// Adds or replaces universes by id, keeping first-seen order.
    pub fn upsert(&self, universes: impl IntoIterator<Item = Universe>) {
        let universes: Vec<Universe> = universes.into_iter().collect();

        self.update(|state| {
            for universe in universes {
                match state.iter_mut().find(|u| u.id == universe.id) {
                    Some(existing) => *existing = universe,
                    None => state.push(universe),
                }
            }
        });
    }

    #[must_use]
    pub fn find(&self, id: &Principal) -> Option<Universe> {
        self.with(|state| state.iter().find(|u| &u.id == id).copied())
    }
}
