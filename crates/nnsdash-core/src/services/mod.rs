//! Domain services.
//!
//! Each service wraps canister calls in [`query_and_update`](crate::sync::query_and_update),
//! writes results through the stores and reports failures as toasts. Nothing
//! here propagates a transport error to the renderer; the returned `Result`
//! only tells an aggregating caller that something failed.

pub mod accounts;
pub mod hardware_wallet;
pub mod icp_accounts;
pub mod sns_neurons;
pub mod toasts;
pub mod tokens;
pub mod transactions;

use crate::{AppContext, Error, log, log::Topic, services::toasts::{ErrorToast, toasts_error}, types::Identity};

/// The signed-in identity, or a toast and `Error::NoIdentity`.
pub(crate) fn require_identity(ctx: &AppContext) -> Result<Identity, Error> {
    ctx.identity().inspect_err(|err| {
        log!(Topic::Accounts, Warn, "no identity: {err}");
        toasts_error(ctx, ErrorToast::new("error.missing_identity"));
    })
}
