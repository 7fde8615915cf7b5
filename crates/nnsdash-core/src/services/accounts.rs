//! Accounts on ICRC ledgers (SNS projects and ckBTC).

use crate::{
    AppContext, Error,
    api::{
        RequestContext,
        icrc_ledger::{IcrcTransferRequest, get_icrc_main_account, get_icrc_token},
    },
    log,
    log::Topic,
    services::{
        require_identity,
        toasts::{ErrorToast, toasts_error},
        tokens::load_token_reporting,
        transactions::load_account_transactions,
    },
    store::{AccountsData, TokenData},
    sync::{Failed, Loaded, Strategy, query_and_update, settle_all},
    types::{Account, IcrcAccount, Identity, Principal, Universe},
};

fn universe_of(ctx: &AppContext, universe_id: &Principal) -> Result<Universe, Error> {
    ctx.universe(universe_id).ok_or_else(|| {
        log!(Topic::Accounts, Warn, "unknown universe {universe_id}");
        Error::invalid(format!("unknown universe {universe_id}"))
    })
}

fn commit_accounts(ctx: &AppContext, universe_id: Principal, account: Account, certified: bool) {
    ctx.stores().accounts.set_accounts(
        universe_id,
        AccountsData {
            accounts: vec![account],
            certified,
        },
    );
}

///
/// load_accounts
///
/// Main account of the signed-in user on `universe_id`. When the certified
/// read fails the universe's accounts and transactions are cleared together
/// and the failure goes to `handle_error`, or to a toast without one.
///

pub async fn load_accounts(
    ctx: &AppContext,
    universe_id: Principal,
    strategy: Strategy,
    handle_error: Option<&dyn Fn(&Error)>,
) -> Result<(), Error> {
    let identity = require_identity(ctx)?;
    let universe = universe_of(ctx, &universe_id)?;
    let api = ctx.apis().icrc_ledger.as_ref();

    query_and_update(
        |req| get_icrc_main_account(api, req, universe.ledger_canister_id),
        |Loaded { response, certified }| commit_accounts(ctx, universe_id, response, certified),
        |Failed { error, certified }| {
            if !certified && strategy.runs_update() {
                return Ok(());
            }

            // hide unproven data
            ctx.stores().reset_universe_data(&universe_id);

            match handle_error {
                Some(handle) => handle(&error),
                None => {
                    toasts_error(ctx, ErrorToast::new("error.accounts_not_found").with_err(&error));
                }
            }

            Err(error)
        },
        strategy,
        identity,
    )
    .await
}

///
/// sync_accounts
///
/// Accounts and token of a universe, loaded side by side. Both loads run to
/// the end; if either failed the user gets a single toast.
///

pub async fn sync_accounts(
    ctx: &AppContext,
    universe_id: Principal,
    strategy: Strategy,
) -> Result<(), Error> {
    require_identity(ctx)?;

    let report: &dyn Fn(&Error) = &|err| {
        log!(Topic::Accounts, Debug, "sync of {universe_id} failed: {err}");
    };

    let (accounts, token) = futures::join!(
        load_accounts(ctx, universe_id, strategy, Some(report)),
        load_token_reporting(ctx, universe_id, strategy, Some(report)),
    );

    let mut errors = [accounts, token].into_iter().filter_map(Result::err);
    match errors.next() {
        Some(first) => {
            toasts_error(ctx, ErrorToast::new("error.sns_accounts_balance_load").with_err(&first));
            Err(first)
        }
        None => Ok(()),
    }
}

fn has_certified_accounts(ctx: &AppContext, universe_id: &Principal) -> bool {
    ctx.stores()
        .accounts
        .universe(universe_id)
        .is_some_and(|data| data.certified)
}

fn has_certified_token(ctx: &AppContext, universe_id: &Principal) -> bool {
    ctx.stores()
        .tokens
        .token(universe_id)
        .is_some_and(|data| data.certified)
}

async fn query_balance(ctx: &AppContext, identity: Identity, universe: Universe) -> Result<(), Error> {
    let api = ctx.apis().icrc_ledger.as_ref();

    query_and_update(
        |req| get_icrc_main_account(api, req, universe.ledger_canister_id),
        |Loaded { response, certified }| {
            if has_certified_accounts(ctx, &universe.id) {
                log!(Topic::Accounts, Debug, "kept certified accounts of {}", universe.id);
                return;
            }
            commit_accounts(ctx, universe.id, response, certified);
        },
        |Failed { error, .. }| Err(error),
        Strategy::Query,
        identity,
    )
    .await
}

async fn query_token(ctx: &AppContext, identity: Identity, universe: Universe) -> Result<(), Error> {
    let api = ctx.apis().icrc_ledger.as_ref();

    query_and_update(
        |req| get_icrc_token(api, req, universe.ledger_canister_id),
        |Loaded { response, certified }| {
            if has_certified_token(ctx, &universe.id) {
                return;
            }
            ctx.stores().tokens.set_token(
                universe.id,
                TokenData {
                    token: response,
                    certified,
                },
            );
        },
        |Failed { error, .. }| Err(error),
        Strategy::Query,
        identity,
    )
    .await
}

///
/// uncertified_load_accounts_balance
///
/// Query-only balances and tokens for several universes at once, typically
/// to fill the tokens table. Every sub-fetch runs to completion; successes
/// are committed and a single toast reports that some failed. Certified data
/// arrives when a universe is opened and `load_accounts` runs; universes that
/// already hold it are skipped, and a query landing after it is dropped.
///

pub async fn uncertified_load_accounts_balance(ctx: &AppContext, universe_ids: &[Principal]) {
    let Ok(identity) = require_identity(ctx) else {
        return;
    };

    let universes: Vec<Universe> = universe_ids
        .iter()
        .filter_map(|id| universe_of(ctx, id).ok())
        .collect();

    let balances = universes
        .iter()
        .filter(|u| !has_certified_accounts(ctx, &u.id))
        .map(|u| query_balance(ctx, identity, *u));
    let tokens = universes
        .iter()
        .filter(|u| !has_certified_token(ctx, &u.id))
        .map(|u| query_token(ctx, identity, *u));

    let errors = futures::join!(settle_all(balances), settle_all(tokens));
    let failed = errors.0.len() + errors.1.len();

    if failed > 0 {
        log!(Topic::Accounts, Warn, "{failed} uncertified balance loads failed");
        toasts_error(ctx, ErrorToast::new("error.sns_accounts_balance_load"));
    }
}

///
/// TransferParams
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferParams {
    pub universe_id: Principal,
    pub source: Account,
    pub destination: IcrcAccount,
    pub amount_e8s: u64,
    pub load_transactions: bool,
}

///
/// TransferOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransferOutcome {
    pub success: bool,
}

///
/// transfer_tokens
///
/// Sends from `source`, then reloads the universe's accounts and, when
/// asked, the source's transactions. The fee must already be known.
///

pub async fn transfer_tokens(ctx: &AppContext, params: TransferParams) -> TransferOutcome {
    let failure = TransferOutcome { success: false };

    let Some(fee) = ctx
        .stores()
        .tokens
        .token(&params.universe_id)
        .map(|data| data.token.fee)
    else {
        toasts_error(ctx, ErrorToast::new("error.transaction_fee_not_found"));
        return failure;
    };

    let Ok(identity) = require_identity(ctx) else {
        return failure;
    };
    let universe = match universe_of(ctx, &params.universe_id) {
        Ok(universe) => universe,
        Err(err) => {
            toasts_error(ctx, ErrorToast::new("error.universe_not_found").with_err(&err));
            return failure;
        }
    };

    let request = IcrcTransferRequest {
        from_subaccount: params.source.sub_account,
        to: params.destination,
        amount: params.amount_e8s,
        fee,
        created_at_time: None,
    };

    let transfer = ctx
        .apis()
        .icrc_ledger
        .transfer(
            RequestContext::update(identity),
            universe.ledger_canister_id,
            request.to_transfer_arg(),
        )
        .await;

    match transfer {
        Ok(block_index) => {
            log!(Topic::Transactions, Ok, "transfer at block {block_index} on {}", universe.id);
        }
        Err(err) => {
            toasts_error(ctx, ErrorToast::new("error.transaction_error").with_err(&err));
            return failure;
        }
    }

    let reload_transactions = async {
        if params.load_transactions {
            load_account_transactions(ctx, params.universe_id, &params.source, None).await
        } else {
            Ok(())
        }
    };

    let (accounts, transactions) = futures::join!(
        load_accounts(ctx, params.universe_id, Strategy::QueryAndUpdate, None),
        reload_transactions,
    );
    if let Err(err) = accounts.and(transactions) {
        log!(Topic::Transactions, Debug, "reload after transfer failed: {err}");
    }

    TransferOutcome { success: true }
}
