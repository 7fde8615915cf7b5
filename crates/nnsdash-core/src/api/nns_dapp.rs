use crate::{
    Error,
    api::RequestContext,
    types::{Identity, Principal, Subaccount},
};
use async_trait::async_trait;
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// SubAccountDetails
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SubAccountDetails {
    pub name: String,
    pub sub_account: Subaccount,
    pub account_identifier: String,
}

///
/// HardwareWalletAccountDetails
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HardwareWalletAccountDetails {
    pub name: String,
    pub principal: Principal,
    pub account_identifier: String,
}

///
/// AccountDetails
/// The user's record in the dashboard canister.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AccountDetails {
    pub principal: Principal,
    pub account_identifier: String,
    pub sub_accounts: Vec<SubAccountDetails>,
    pub hardware_wallet_accounts: Vec<HardwareWalletAccountDetails>,
}

///
/// NnsDappApi
///

#[async_trait(?Send)]
pub trait NnsDappApi {
    async fn get_account(&self, ctx: RequestContext) -> Result<AccountDetails, Error>;

    async fn register_hardware_wallet(
        &self,
        identity: Identity,
        name: String,
        principal: Principal,
    ) -> Result<(), Error>;
}
