use crate::store::Writable;
use derive_more::Deref;

///
/// PageState
/// What the router exposes: the selected universe (principal text) and path.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageState {
    pub universe: String,
    pub path: String,
}

///
/// PageStore
///

#[derive(Clone, Default, Deref)]
pub struct PageStore(Writable<PageState>);

impl PageStore {
    pub fn select_universe(&self, universe: impl Into<String>) {
        let universe = universe.into();
        self.update(|page| page.universe = universe);
    }

    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        self.update(|page| page.path = path);
    }
}
