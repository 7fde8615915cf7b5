//! Query/update reconciliation.
//!
//! A read can be issued as a fast uncertified query, as a slow certified
//! update, or as both at once. [`query_and_update`] runs the selected calls,
//! tracks each branch in a [`SyncRound`] and applies the merge rule: once the
//! update has settled, a later query response is dropped.

mod query_and_update;
mod state;

pub use query_and_update::*;
pub use state::*;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Strategy
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum Strategy {
    Query,
    #[default]
    QueryAndUpdate,
    Update,
}

impl Strategy {
    #[must_use]
    pub const fn runs_query(self) -> bool {
        matches!(self, Self::Query | Self::QueryAndUpdate)
    }

    #[must_use]
    pub const fn runs_update(self) -> bool {
        matches!(self, Self::Update | Self::QueryAndUpdate)
    }
}
