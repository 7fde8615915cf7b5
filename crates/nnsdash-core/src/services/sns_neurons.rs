use crate::{
    AppContext, Error, log,
    log::Topic,
    services::{
        require_identity,
        toasts::{ErrorToast, toasts_error},
    },
    sync::{Failed, Loaded, Strategy, query_and_update},
    types::Principal,
};

///
/// load_sns_neurons
///
/// Neurons of the signed-in user in one project. A failed certified read
/// drops the project's neurons rather than leaving query data on screen.
///

pub async fn load_sns_neurons(
    ctx: &AppContext,
    root_canister_id: Principal,
    strategy: Strategy,
) -> Result<(), Error> {
    let identity = require_identity(ctx)?;
    let api = ctx.apis().sns_governance.as_ref();

    query_and_update(
        |req| api.query_neurons(req, root_canister_id),
        |Loaded { response, certified }| {
            log!(Topic::Neurons, Debug, "{} neurons in {root_canister_id}", response.len());
            ctx.stores()
                .sns_neurons
                .set_neurons(root_canister_id, response, certified);
        },
        |Failed { error, certified }| {
            if !certified && strategy.runs_update() {
                return Ok(());
            }

            ctx.stores().sns_neurons.reset_project(&root_canister_id);
            toasts_error(ctx, ErrorToast::new("error__sns.sns_neurons_load").with_err(&error));

            Err(error)
        },
        strategy,
        identity,
    )
    .await
}
