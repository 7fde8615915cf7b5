use crate::{
    AppContext,
    derived::{Derived, derived, derived3},
    store::{AccountsState, TokenData, TokensState},
    types::{Principal, Token, TokenAmount, Universe, UniverseKind},
};
use derive_more::Display;

///
/// UserTokenAction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum UserTokenAction {
    GoToDetail,
    Receive,
    Send,
}

///
/// UserTokenBalance
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserTokenBalance {
    Loading,
    Loaded(TokenAmount),
}

///
/// UserToken
/// One row of the tokens table.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserToken {
    pub universe_id: Principal,
    pub title: String,
    pub token: Option<Token>,
    pub balance: UserTokenBalance,
    pub actions: Vec<UserTokenAction>,
}

pub fn ckbtc_token(ctx: &AppContext) -> Derived<Option<TokenData>> {
    let ckbtc = ctx.ckbtc_universe().map(|u| u.id);

    derived(&*ctx.stores().tokens, move |tokens| {
        ckbtc.and_then(|id| tokens.get(&id).cloned())
    })
}

fn user_token(
    universe: &Universe,
    accounts: &AccountsState,
    tokens: &TokensState,
    ckbtc_receive: bool,
) -> UserToken {
    let token = if universe.is_nns() {
        Some(Token::icp())
    } else {
        tokens.get(&universe.id).map(|data| data.token.token())
    };

    let balance = accounts
        .get(&universe.id)
        .and_then(|data| data.main())
        .map_or(UserTokenBalance::Loading, |main| {
            UserTokenBalance::Loaded(main.balance.clone())
        });

    let actions = match universe.kind {
        UniverseKind::Nns => vec![UserTokenAction::GoToDetail],
        UniverseKind::CkBtc if !ckbtc_receive => vec![UserTokenAction::Send],
        UniverseKind::CkBtc | UniverseKind::Sns => {
            vec![UserTokenAction::Receive, UserTokenAction::Send]
        }
    };

    UserToken {
        universe_id: universe.id,
        title: token
            .as_ref()
            .map_or_else(|| universe.id.to_text(), |token| token.name.clone()),
        token,
        balance,
        actions,
    }
}

/// Rows for the home network, ckBTC and every known project, in that order.
pub fn user_tokens(ctx: &AppContext) -> Derived<Vec<UserToken>> {
    let nns = ctx.nns_universe();
    let ckbtc = ctx.ckbtc_universe();
    let ckbtc_receive = ctx.config().features.enable_ckbtc_receive;
    let stores = ctx.stores();

    derived3(
        &*stores.universes,
        &*stores.accounts,
        &*stores.tokens,
        move |universes, accounts, tokens| {
            let mut rows = vec![user_token(&nns, accounts, tokens, ckbtc_receive)];
            rows.extend(ckbtc.iter().map(|u| user_token(u, accounts, tokens, ckbtc_receive)));
            rows.extend(
                universes
                    .iter()
                    .filter(|u| Some(u.id) != ckbtc.map(|c| c.id) && u.id != nns.id)
                    .map(|u| user_token(u, accounts, tokens, ckbtc_receive)),
            );

            rows
        },
    )
}
