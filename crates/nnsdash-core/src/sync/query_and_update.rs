use crate::{
    Error,
    api::RequestContext,
    log,
    log::Topic,
    sync::{Delivery, Strategy, SyncRound},
    types::Identity,
};
use futures::future::join_all;
use std::{cell::RefCell, future::Future};

///
/// Loaded
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loaded<R> {
    pub response: R,
    pub certified: bool,
}

///
/// Failed
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failed {
    pub error: Error,
    pub certified: bool,
}

///
/// query_and_update
///
/// Issues `request` once per branch selected by `strategy` and reports every
/// outcome through the callbacks, each at most once. Under
/// `QueryAndUpdate` both calls are in flight together and either may land
/// first; a query success landing after the update settled is dropped.
///
/// A failed query never suppresses the update. Errors go to `on_error`; the
/// first `Err` it returns is handed back once both branches have settled.
///

pub async fn query_and_update<R, F, Fut, L, E>(
    request: F,
    on_load: L,
    on_error: E,
    strategy: Strategy,
    identity: Identity,
) -> Result<(), Error>
where
    F: Fn(RequestContext) -> Fut,
    Fut: Future<Output = Result<R, Error>>,
    L: FnMut(Loaded<R>),
    E: FnMut(Failed) -> Result<(), Error>,
{
    let round = RefCell::new(SyncRound::new());
    let on_load = RefCell::new(on_load);
    let on_error = RefCell::new(on_error);
    let escalated: RefCell<Option<Error>> = RefCell::new(None);

    log!(Topic::Sync, Debug, "round start ({strategy})");

    let (round_ref, on_load_ref, on_error_ref, escalated_ref, request_ref) =
        (&round, &on_load, &on_error, &escalated, &request);

    let branch = move |certified: bool| async move {
        round_ref.borrow_mut().start(certified);

        let result = request_ref(RequestContext::new(identity, certified)).await;

        match result {
            Ok(response) => {
                let delivery = round_ref.borrow_mut().succeed(certified);

                match delivery {
                    Delivery::Deliver => {
                        let mut on_load = on_load_ref.borrow_mut();
                        (*on_load)(Loaded {
                            response,
                            certified,
                        });
                    }
                    Delivery::DiscardStale => {
                        log!(
                            Topic::Sync,
                            Debug,
                            "query response discarded, update already settled"
                        );
                    }
                }
            }
            Err(error) => {
                round_ref.borrow_mut().fail(certified);
                log!(Topic::Sync, Debug, "branch failed (certified={certified}): {error}");

                let mut on_error = on_error_ref.borrow_mut();
                if let Err(err) = (*on_error)(Failed { error, certified }) {
                    escalated_ref.borrow_mut().get_or_insert(err);
                }
            }
        }
    };

    match strategy {
        Strategy::Query => branch(false).await,
        Strategy::Update => branch(true).await,
        Strategy::QueryAndUpdate => {
            futures::join!(branch(false), branch(true));
        }
    }

    debug_assert!(round.borrow().is_settled());
    log!(Topic::Sync, Debug, "round done ({strategy})");

    escalated.into_inner().map_or(Ok(()), Err)
}

///
/// settle_all
///
/// Drives every future to completion without short-circuiting and returns
/// the errors in input order. Successes have already been committed by the
/// futures themselves.
///

pub async fn settle_all<I, Fut>(futures: I) -> Vec<Error>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<(), Error>>,
{
    join_all(futures)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect()
}

///
/// TESTS
///
