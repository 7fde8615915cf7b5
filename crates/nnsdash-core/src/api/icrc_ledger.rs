use crate::{
    Error,
    api::RequestContext,
    wire::icrc::IcrcTokenMetadataResponse,
    types::{
        Account, GetTransactions, IcrcAccount, IcrcTokenMetadata, Principal, Subaccount,
        TokenAmount,
    },
    utils::icrc_tokens::map_optional_token,
};
use async_trait::async_trait;
use candid::Nat;
use icrc_ledger_types::icrc1::transfer::TransferArg;

///
/// GetTransactionsRequest
/// One page of an account's history from an index canister.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetTransactionsRequest {
    pub account: IcrcAccount,
    /// Start below this transaction id; `None` starts at the newest.
    pub start: Option<u64>,
    pub max_results: u64,
}

///
/// IcrcTransferRequest
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IcrcTransferRequest {
    pub from_subaccount: Option<Subaccount>,
    pub to: IcrcAccount,
    pub amount: u64,
    pub fee: u64,
    pub created_at_time: Option<u64>,
}

impl IcrcTransferRequest {
    #[must_use]
    pub fn to_transfer_arg(&self) -> TransferArg {
        TransferArg {
            from_subaccount: self.from_subaccount,
            to: self.to,
            fee: Some(Nat::from(self.fee)),
            created_at_time: self.created_at_time,
            memo: None,
            amount: Nat::from(self.amount),
        }
    }
}

///
/// IcrcLedgerApi
/// ICRC-1 ledger and its index canister.
///

#[async_trait(?Send)]
pub trait IcrcLedgerApi {
    async fn balance(
        &self,
        ctx: RequestContext,
        ledger_canister_id: Principal,
        account: IcrcAccount,
    ) -> Result<u64, Error>;

    async fn metadata(
        &self,
        ctx: RequestContext,
        ledger_canister_id: Principal,
    ) -> Result<IcrcTokenMetadataResponse, Error>;

    /// Returns the block index of the transfer.
    async fn transfer(
        &self,
        ctx: RequestContext,
        ledger_canister_id: Principal,
        arg: TransferArg,
    ) -> Result<u64, Error>;

    async fn transactions(
        &self,
        ctx: RequestContext,
        index_canister_id: Principal,
        request: GetTransactionsRequest,
    ) -> Result<GetTransactions, Error>;
}

/// Metadata of a ledger, failing when a required field is missing.
pub async fn get_icrc_token(
    api: &dyn IcrcLedgerApi,
    ctx: RequestContext,
    ledger_canister_id: Principal,
) -> Result<IcrcTokenMetadata, Error> {
    let response = api.metadata(ctx, ledger_canister_id).await?;

    map_optional_token(&response).ok_or_else(|| {
        Error::invalid(format!("token metadata of {ledger_canister_id} is incomplete"))
    })
}

/// Main account of the context identity: balance and token fetched together.
pub async fn get_icrc_main_account(
    api: &dyn IcrcLedgerApi,
    ctx: RequestContext,
    ledger_canister_id: Principal,
) -> Result<Account, Error> {
    let owner = ctx.identity.principal();
    let icrc = IcrcAccount {
        owner,
        subaccount: None,
    };

    let (balance, token) = futures::join!(
        api.balance(ctx, ledger_canister_id, icrc),
        get_icrc_token(api, ctx, ledger_canister_id),
    );

    let balance = TokenAmount::from_e8s(balance?, token?.token());

    Ok(Account::icrc_main(owner, balance))
}
