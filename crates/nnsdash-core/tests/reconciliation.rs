//! Query/update reconciliation as the services see it.

use futures::executor::block_on;
use nnsdash_core::{
    Error,
    api::ApiError,
    services::{
        accounts::{load_accounts, sync_accounts, uncertified_load_accounts_balance},
        icp_accounts::sync_icp_accounts,
    },
    store::{Readable, TransactionsPage, Unsubscriber},
    sync::Strategy,
    types::{Principal, Universe},
};
use nnsdash_testkit::{
    Fake,
    fixtures::{
        TestEnv, mock_account_details, mock_sns_universe, mock_token_metadata, mock_transaction,
    },
    yield_now,
};
use std::{cell::Cell, rc::Rc};

fn setup() -> (TestEnv, Universe) {
    let env = TestEnv::new();
    let sns = env.add_sns(100);
    env.ledger
        .metadata
        .of(sns.ledger_canister_id)
        .always(Ok(mock_token_metadata("Tetris", "TETRIS", 10_000)));

    (env, sns)
}

fn seed_transactions(env: &TestEnv, universe_id: Principal) {
    env.stores().transactions.add_transactions(TransactionsPage {
        universe_id,
        account_identifier: "main".to_string(),
        transactions: vec![mock_transaction(1)],
        oldest_tx_id: Some(1),
        completed: true,
    });
}

#[test]
fn certified_result_wins_whatever_the_arrival_order() {
    for update_first in [false, true] {
        let (env, sns) = setup();
        let balances = env.ledger.balances.of(sns.ledger_canister_id);
        let query = balances.gate(false);
        let update = balances.gate(true);

        block_on(async {
            let driver = async {
                yield_now().await;
                if update_first {
                    update.send(Ok(200)).unwrap();
                    yield_now().await;
                    query.send(Ok(100)).unwrap();
                } else {
                    query.send(Ok(100)).unwrap();
                    yield_now().await;
                    update.send(Ok(200)).unwrap();
                }
                yield_now().await;
            };

            let (result, ()) = futures::join!(
                load_accounts(&env, sns.id, Strategy::QueryAndUpdate, None),
                driver
            );
            assert!(result.is_ok());
        });

        let data = env.stores().accounts.universe(&sns.id).unwrap();
        assert!(data.certified, "update_first={update_first}");
        assert_eq!(data.main().unwrap().balance.to_e8s(), 200);
        assert_eq!(data.main().unwrap().balance.to_string(), "0.000002 TETRIS");
        assert!(env.toast_texts().is_empty());
    }
}

#[test]
fn failed_update_clears_accounts_and_transactions() {
    let (env, sns) = setup();
    seed_transactions(&env, sns.id);

    let balances = env.ledger.balances.of(sns.ledger_canister_id);
    let query = balances.gate(false);
    let update = balances.gate(true);

    let seen_uncertified = Cell::new(false);

    block_on(async {
        let driver = async {
            yield_now().await;
            query.send(Ok(100)).unwrap();
            yield_now().await;
            seen_uncertified.set(
                env.stores()
                    .accounts
                    .universe(&sns.id)
                    .is_some_and(|data| !data.certified),
            );
            update.send(Err(ApiError::new("update rejected").into())).unwrap();
            yield_now().await;
        };

        let (result, ()) = futures::join!(
            load_accounts(&env, sns.id, Strategy::QueryAndUpdate, None),
            driver
        );
        assert!(result.is_err());
    });

    assert!(seen_uncertified.get());
    assert!(env.stores().accounts.universe(&sns.id).is_none());
    assert!(env.stores().transactions.account(&sns.id, "main").is_none());

    let toasts = env.toast_texts();
    assert_eq!(toasts.len(), 1);
    assert!(toasts[0].ends_with("update rejected"));
}

#[test]
fn failed_query_alone_is_ignored_when_update_follows() {
    let (env, sns) = setup();
    let balances = env.ledger.balances.of(sns.ledger_canister_id);
    balances.push(false, Err(ApiError::new("query down").into()));
    balances.push(true, Ok(300));

    let result = block_on(load_accounts(&env, sns.id, Strategy::QueryAndUpdate, None));

    assert!(result.is_ok());
    let data = env.stores().accounts.universe(&sns.id).unwrap();
    assert!(data.certified);
    assert_eq!(data.main().unwrap().balance.to_e8s(), 300);
    assert!(env.toast_texts().is_empty());
}

#[test]
fn handle_error_replaces_the_toast() {
    let (env, sns) = setup();
    env.ledger.balances.of(sns.ledger_canister_id).always(Err(ApiError::new("down").into()));

    let handled = Cell::new(0);
    let handle: &dyn Fn(&Error) = &|_| handled.set(handled.get() + 1);

    let result = block_on(load_accounts(&env, sns.id, Strategy::QueryAndUpdate, Some(handle)));

    assert!(result.is_err());
    assert_eq!(handled.get(), 1);
    assert!(env.toast_texts().is_empty());
}

#[test]
fn settle_all_commits_successes_and_toasts_once() {
    let env = TestEnv::new();
    let universes: Vec<Universe> = [100, 200, 300].map(|seed| env.add_sns(seed)).to_vec();

    for (i, universe) in universes.iter().enumerate() {
        env.ledger
            .metadata
            .of(universe.ledger_canister_id)
            .always(Ok(mock_token_metadata("Token", "TKN", 10_000)));

        let balance = if i == 1 {
            Err(ApiError::new("subnet down").into())
        } else {
            Ok(1_000)
        };
        env.ledger.balances.of(universe.ledger_canister_id).always(balance);
    }

    let ids: Vec<_> = universes.iter().map(|u| u.id).collect();
    block_on(uncertified_load_accounts_balance(&env, &ids));

    let accounts = env.stores().accounts.get();
    assert!(accounts.contains_key(&universes[0].id));
    assert!(!accounts.contains_key(&universes[1].id));
    assert!(accounts.contains_key(&universes[2].id));
    assert!(accounts.values().all(|data| !data.certified));

    // tokens still load for every universe, including the failing one
    assert_eq!(env.stores().tokens.get().len(), 3);

    // only query calls were made
    let calls = env.ledger.balances.of(universes[0].ledger_canister_id).calls();
    assert!(calls.iter().all(|ctx| !ctx.certified));

    assert_eq!(
        env.toast_texts(),
        vec!["Sorry, there was an error loading the balance of the accounts.".to_string()]
    );
}

#[test]
fn unknown_universe_is_an_error_without_calls() {
    let env = TestEnv::new();
    let stranger = mock_sns_universe(900);

    let result = block_on(load_accounts(&env, stranger.id, Strategy::QueryAndUpdate, None));

    assert!(result.is_err());
    assert!(env.ledger.balances.of(stranger.ledger_canister_id).calls().is_empty());
}

/// Flags any accounts notification where `universe_id` is gone from the
/// accounts but its transactions are still there.
fn watch_for_half_cleared(env: &TestEnv, universe_id: Principal) -> (Rc<Cell<bool>>, Unsubscriber) {
    let torn = Rc::new(Cell::new(false));
    let (flag, transactions) = (Rc::clone(&torn), env.stores().transactions.clone());

    let unsub = env.stores().accounts.subscribe(move |accounts| {
        if !accounts.contains_key(&universe_id)
            && transactions.account(&universe_id, "main").is_some()
        {
            flag.set(true);
        }
    });

    (torn, unsub)
}

#[test]
fn failed_update_is_never_seen_half_cleared() {
    let (env, sns) = setup();
    seed_transactions(&env, sns.id);

    let balances = env.ledger.balances.of(sns.ledger_canister_id);
    balances.push(false, Ok(100));
    balances.push(true, Err(ApiError::new("update rejected").into()));

    let (torn, unsub) = watch_for_half_cleared(&env, sns.id);
    let result = block_on(load_accounts(&env, sns.id, Strategy::QueryAndUpdate, None));

    assert!(result.is_err());
    assert!(!torn.get());
    assert!(env.stores().transactions.account(&sns.id, "main").is_none());
    unsub.unsubscribe();
}

#[test]
fn failed_icp_update_is_never_seen_half_cleared() {
    let env = TestEnv::new();
    let nns = env.nns_universe().id;
    seed_transactions(&env, nns);

    env.nns_dapp.accounts.push(
        false,
        Ok(mock_account_details(TestEnv::identity().principal(), Fake::principal(77))),
    );
    env.nns_dapp.accounts.push(true, Err(ApiError::new("boom").into()));
    env.ledger
        .balances
        .of(env.config().network.icp_ledger_canister_id)
        .always(Ok(1));

    let (torn, unsub) = watch_for_half_cleared(&env, nns);
    let result = block_on(sync_icp_accounts(&env, Strategy::QueryAndUpdate));

    assert!(result.is_err());
    assert!(!torn.get());
    assert!(env.stores().accounts.universe(&nns).is_none());
    unsub.unsubscribe();
}

#[test]
fn sync_accounts_summarizes_failures_once() {
    let env = TestEnv::new();
    let sns = env.add_sns(100);
    env.ledger
        .balances
        .of(sns.ledger_canister_id)
        .always(Err(ApiError::new("b").into()));
    env.ledger
        .metadata
        .of(sns.ledger_canister_id)
        .always(Err(ApiError::new("m").into()));

    let most_toasts = Rc::new(Cell::new(0));
    let peak = Rc::clone(&most_toasts);
    let unsub = env
        .stores()
        .toasts
        .subscribe(move |toasts| peak.set(peak.get().max(toasts.len())));

    let result = block_on(sync_accounts(&env, sns.id, Strategy::QueryAndUpdate));

    assert!(result.is_err());
    assert_eq!(most_toasts.get(), 1);
    assert_eq!(
        env.toast_texts(),
        vec!["Sorry, there was an error loading the balance of the accounts. b".to_string()]
    );
    unsub.unsubscribe();
}

#[test]
fn uncertified_reload_keeps_certified_balances() {
    let (env, sns) = setup();
    let balances = env.ledger.balances.of(sns.ledger_canister_id);
    balances.push(true, Ok(200));
    block_on(load_accounts(&env, sns.id, Strategy::Update, None)).unwrap();

    balances.always(Ok(50));
    block_on(uncertified_load_accounts_balance(&env, &[sns.id]));

    let data = env.stores().accounts.universe(&sns.id).unwrap();
    assert!(data.certified);
    assert_eq!(data.main().unwrap().balance.to_e8s(), 200);
    assert_eq!(balances.call_count(false), 0);
}

#[test]
fn late_uncertified_balance_does_not_replace_certified_one() {
    let (env, sns) = setup();
    let balances = env.ledger.balances.of(sns.ledger_canister_id);
    let query = balances.gate(false);
    balances.push(true, Ok(200));

    block_on(async {
        let certified_load = async {
            yield_now().await;
            load_accounts(&env, sns.id, Strategy::Update, None).await.unwrap();
            query.send(Ok(50)).unwrap();
            yield_now().await;
        };

        let ids = [sns.id];
        futures::join!(
            uncertified_load_accounts_balance(&env, &ids),
            certified_load
        );
    });

    let data = env.stores().accounts.universe(&sns.id).unwrap();
    assert!(data.certified);
    assert_eq!(data.main().unwrap().balance.to_e8s(), 200);
    assert!(env.toast_texts().is_empty());
}
