//! Accounts on the home network: main, named subaccounts and attached
//! hardware wallets, as recorded by the dashboard canister.

use crate::{
    AppContext, Error,
    api::{AccountDetails, IcrcLedgerApi, RequestContext},
    log,
    log::Topic,
    services::{
        require_identity,
        toasts::{ErrorToast, toasts_error},
    },
    store::AccountsData,
    sync::{Failed, Loaded, Strategy, query_and_update},
    types::{Account, AccountType, IcrcAccount, Principal, Subaccount, Token, TokenAmount},
};
use futures::future::try_join_all;

struct Pending {
    identifier: String,
    owner: Principal,
    sub_account: Option<Subaccount>,
    name: Option<String>,
    account_type: AccountType,
}

fn pending_accounts(details: AccountDetails) -> Vec<Pending> {
    let owner = details.principal;
    let main = Pending {
        identifier: details.account_identifier,
        owner,
        sub_account: None,
        name: None,
        account_type: AccountType::Main,
    };

    let subs = details.sub_accounts.into_iter().map(|sub| Pending {
        identifier: sub.account_identifier,
        owner,
        sub_account: Some(sub.sub_account),
        name: Some(sub.name),
        account_type: AccountType::SubAccount,
    });

    let wallets = details.hardware_wallet_accounts.into_iter().map(|hw| Pending {
        identifier: hw.account_identifier,
        owner: hw.principal,
        sub_account: None,
        name: Some(hw.name),
        account_type: AccountType::HardwareWallet,
    });

    std::iter::once(main).chain(subs).chain(wallets).collect()
}

async fn load_icp_accounts(
    ctx: &AppContext,
    req: RequestContext,
) -> Result<Vec<Account>, Error> {
    let details = ctx.apis().nns_dapp.get_account(req).await?;
    let ledger: &dyn IcrcLedgerApi = ctx.apis().icrc_ledger.as_ref();
    let ledger_canister_id = ctx.config().network.icp_ledger_canister_id;

    let accounts = pending_accounts(details);
    let balances = try_join_all(accounts.iter().map(|pending| {
        ledger.balance(
            req,
            ledger_canister_id,
            IcrcAccount {
                owner: pending.owner,
                subaccount: pending.sub_account,
            },
        )
    }))
    .await?;

    Ok(accounts
        .into_iter()
        .zip(balances)
        .map(|(pending, e8s)| Account {
            identifier: pending.identifier,
            principal: Some(pending.owner),
            balance: TokenAmount::from_e8s(e8s, Token::icp()),
            sub_account: pending.sub_account,
            name: pending.name,
            account_type: pending.account_type,
        })
        .collect())
}

///
/// sync_icp_accounts
///
/// Loads the account record and every balance with the same certification.
/// A failed certified read clears the home network's accounts and
/// transactions.
///

pub async fn sync_icp_accounts(ctx: &AppContext, strategy: Strategy) -> Result<(), Error> {
    let identity = require_identity(ctx)?;
    let universe_id = ctx.nns_universe().id;

    query_and_update(
        |req| load_icp_accounts(ctx, req),
        |Loaded { response, certified }| {
            log!(Topic::Accounts, Debug, "{} icp accounts (certified: {certified})", response.len());
            ctx.stores().accounts.set_accounts(
                universe_id,
                AccountsData {
                    accounts: response,
                    certified,
                },
            );
        },
        |Failed { error, certified }| {
            if !certified && strategy.runs_update() {
                return Ok(());
            }

            ctx.stores().reset_universe_data(&universe_id);
            toasts_error(ctx, ErrorToast::new("error.accounts_not_found").with_err(&error));

            Err(error)
        },
        strategy,
        identity,
    )
    .await
}
