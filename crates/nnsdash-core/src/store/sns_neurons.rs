use crate::{
    store::Writable,
    types::{Principal, SnsNeuron},
};
use derive_more::Deref;
use std::collections::BTreeMap;

///
/// ProjectNeurons
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectNeurons {
    pub neurons: Vec<SnsNeuron>,
    pub certified: bool,
}

/// Keyed by project root canister id.
pub type SnsNeuronsState = BTreeMap<Principal, ProjectNeurons>;

///
/// SnsNeuronsStore
///

#[derive(Clone, Default, Deref)]
pub struct SnsNeuronsStore(Writable<SnsNeuronsState>);

impl SnsNeuronsStore {
    pub fn set_neurons(&self, root_canister_id: Principal, neurons: Vec<SnsNeuron>, certified: bool) {
        self.update(|state| {
            state.insert(root_canister_id, ProjectNeurons { neurons, certified });
        });
    }

    pub fn reset_project(&self, root_canister_id: &Principal) {
        self.update(|state| {
            state.remove(root_canister_id);
        });
    }

    #[must_use]
    pub fn project(&self, root_canister_id: &Principal) -> Option<ProjectNeurons> {
        self.with(|state| state.get(root_canister_id).cloned())
    }
}
