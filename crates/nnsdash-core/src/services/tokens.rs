use crate::{
    AppContext, Error,
    api::icrc_ledger::get_icrc_token,
    log,
    log::Topic,
    services::{
        require_identity,
        toasts::{ErrorToast, toasts_error},
    },
    store::TokenData,
    sync::{Failed, Loaded, Strategy, query_and_update},
    types::Principal,
};

///
/// load_token
///
/// Token metadata of a universe. Metadata practically never changes, so a
/// certified entry already in the store is kept as is.
///

pub async fn load_token(
    ctx: &AppContext,
    universe_id: Principal,
    strategy: Strategy,
) -> Result<(), Error> {
    load_token_reporting(ctx, universe_id, strategy, None).await
}

/// [`load_token`], with the failure handed to `handle_error` instead of a
/// toast when one is given.
pub(crate) async fn load_token_reporting(
    ctx: &AppContext,
    universe_id: Principal,
    strategy: Strategy,
    handle_error: Option<&dyn Fn(&Error)>,
) -> Result<(), Error> {
    if ctx
        .stores()
        .tokens
        .token(&universe_id)
        .is_some_and(|data| data.certified)
    {
        return Ok(());
    }

    let identity = require_identity(ctx)?;
    let universe = ctx
        .universe(&universe_id)
        .ok_or_else(|| Error::invalid(format!("unknown universe {universe_id}")))?;
    let api = ctx.apis().icrc_ledger.as_ref();

    query_and_update(
        |req| get_icrc_token(api, req, universe.ledger_canister_id),
        |Loaded { response, certified }| {
            ctx.stores().tokens.set_token(
                universe_id,
                TokenData {
                    token: response,
                    certified,
                },
            );
        },
        |Failed { error, certified }| {
            if !certified && strategy.runs_update() {
                return Ok(());
            }

            log!(Topic::Tokens, Warn, "token of {universe_id} not loaded: {error}");
            match handle_error {
                Some(handle) => handle(&error),
                None => {
                    toasts_error(ctx, ErrorToast::new("error.token_not_found").with_err(&error));
                }
            }

            Err(error)
        },
        strategy,
        identity,
    )
    .await
}
