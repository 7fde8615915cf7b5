use crate::{
    AppContext, Error,
    api::{GetTransactionsRequest, RequestContext},
    log,
    log::Topic,
    services::{
        require_identity,
        toasts::{ErrorToast, toasts_error},
    },
    store::TransactionsPage,
    types::{Account, Principal},
};

///
/// load_account_transactions
///
/// One page of `account`'s history from the universe's index canister,
/// starting below `start` (newest page when `None`). The history is complete
/// once the page contains the oldest transaction the index knows.
///

pub async fn load_account_transactions(
    ctx: &AppContext,
    universe_id: Principal,
    account: &Account,
    start: Option<u64>,
) -> Result<(), Error> {
    let identity = require_identity(ctx)?;

    let Some(index_canister_id) = ctx.universe(&universe_id).and_then(|u| u.index_canister_id) else {
        log!(Topic::Transactions, Warn, "no index canister for {universe_id}");
        return Err(Error::invalid(format!("no index canister for {universe_id}")));
    };

    let Some(icrc_account) = account.icrc_account() else {
        return Err(Error::invalid(format!("account {} has no owner", account.identifier)));
    };

    let request = GetTransactionsRequest {
        account: icrc_account,
        start,
        max_results: ctx.config().sync.transaction_page_size,
    };

    let result = ctx
        .apis()
        .icrc_ledger
        .transactions(RequestContext::new(identity, false), index_canister_id, request)
        .await;

    match result {
        Ok(page) => {
            let completed = page
                .transactions
                .iter()
                .any(|tx| Some(tx.id) == page.oldest_tx_id);

            log!(
                Topic::Transactions,
                Debug,
                "{} transactions for {} (completed: {completed})",
                page.transactions.len(),
                account.identifier
            );

            ctx.stores().transactions.add_transactions(TransactionsPage {
                universe_id,
                account_identifier: account.identifier.clone(),
                transactions: page.transactions,
                oldest_tx_id: page.oldest_tx_id,
                completed,
            });

            Ok(())
        }
        Err(err) => {
            toasts_error(ctx, ErrorToast::new("error.transactions_not_found").with_err(&err));

            Err(err)
        }
    }
}
