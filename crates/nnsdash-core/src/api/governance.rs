use crate::{
    Error,
    api::RequestContext,
    types::{NeuronInfo, Principal, SnsNeuron},
};
use async_trait::async_trait;

///
/// SnsGovernanceApi
///

#[async_trait(?Send)]
pub trait SnsGovernanceApi {
    /// Neurons of `ctx.identity` in the project rooted at `root_canister_id`.
    async fn query_neurons(
        &self,
        ctx: RequestContext,
        root_canister_id: Principal,
    ) -> Result<Vec<SnsNeuron>, Error>;
}

///
/// NnsGovernanceApi
///

#[async_trait(?Send)]
pub trait NnsGovernanceApi {
    async fn query_neurons(&self, ctx: RequestContext) -> Result<Vec<NeuronInfo>, Error>;
}
