use crate::{
    AppContext,
    derived::{Derived, derived2, sns_only},
    types::SnsNeuron,
    utils::sns_neuron::{is_community_fund_neuron, sort_sns_neurons_by_created_timestamp},
};

fn selected_project_neurons(ctx: &AppContext, community_fund: bool) -> Derived<Vec<SnsNeuron>> {
    let own = ctx.config().network.own_canister_id;
    let ckbtc = ctx.ckbtc_universe().map(|u| u.id);
    let stores = ctx.stores();

    derived2(&*stores.page, &*stores.sns_neurons, move |page, neurons| {
        let Some(project) = sns_only(page, own, ckbtc).and_then(|root| neurons.get(&root)) else {
            return Vec::new();
        };

        let selected: Vec<SnsNeuron> = project
            .neurons
            .iter()
            .filter(|neuron| is_community_fund_neuron(neuron) == community_fund)
            .cloned()
            .collect();

        sort_sns_neurons_by_created_timestamp(&selected)
    })
}

/// Neurons of the selected project the user staked, newest first.
pub fn sorted_sns_user_neurons(ctx: &AppContext) -> Derived<Vec<SnsNeuron>> {
    selected_project_neurons(ctx, false)
}

/// Neurons of the selected project created through the community fund.
pub fn sorted_sns_cf_neurons(ctx: &AppContext) -> Derived<Vec<SnsNeuron>> {
    selected_project_neurons(ctx, true)
}
