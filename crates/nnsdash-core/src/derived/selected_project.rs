use crate::{
    AppContext,
    derived::{Derived, derived},
    store::PageState,
    types::Principal,
};

/// Universe id from the page, falling back to the home network when the text
/// is not a principal.
#[must_use]
pub fn parse_universe_id(page: &PageState, own_canister_id: Principal) -> Principal {
    Principal::from_text(&page.universe).unwrap_or(own_canister_id)
}

/// The selected universe when it is an SNS project.
#[must_use]
pub fn sns_only(
    page: &PageState,
    own_canister_id: Principal,
    ckbtc_universe_id: Option<Principal>,
) -> Option<Principal> {
    let id = parse_universe_id(page, own_canister_id);

    (id != own_canister_id && Some(id) != ckbtc_universe_id).then_some(id)
}

pub fn selected_universe_id(ctx: &AppContext) -> Derived<Principal> {
    let own = ctx.config().network.own_canister_id;

    derived(&*ctx.stores().page, move |page| parse_universe_id(page, own))
}

/// Same as [`selected_universe_id`]; named after the project pages that read it.
pub fn sns_project_selected(ctx: &AppContext) -> Derived<Principal> {
    selected_universe_id(ctx)
}

pub fn is_nns_project(ctx: &AppContext) -> Derived<bool> {
    let own = ctx.config().network.own_canister_id;

    derived(&*ctx.stores().page, move |page| parse_universe_id(page, own) == own)
}

pub fn is_ckbtc_project(ctx: &AppContext) -> Derived<bool> {
    let own = ctx.config().network.own_canister_id;
    let ckbtc = ctx.ckbtc_universe().map(|u| u.id);

    derived(&*ctx.stores().page, move |page| {
        Some(parse_universe_id(page, own)) == ckbtc
    })
}

pub fn sns_only_project(ctx: &AppContext) -> Derived<Option<Principal>> {
    let own = ctx.config().network.own_canister_id;
    let ckbtc = ctx.ckbtc_universe().map(|u| u.id);

    derived(&*ctx.stores().page, move |page| sns_only(page, own, ckbtc))
}

///
/// TESTS
///
