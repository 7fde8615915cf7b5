use crate::{store::Writable, types::Identity};
use derive_more::Deref;

///
/// AuthStore
/// The signed-in identity, if any.
///

#[derive(Clone, Default, Deref)]
pub struct AuthStore(Writable<Option<Identity>>);

impl AuthStore {
    pub fn sign_in(&self, identity: Identity) {
        self.set(Some(identity));
    }

    pub fn sign_out(&self) {
        self.set(None);
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.with(|identity| *identity)
    }
}
