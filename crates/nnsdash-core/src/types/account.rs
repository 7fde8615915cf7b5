use crate::types::TokenAmount;
use candid::{CandidType, Principal};
use derive_more::Display;
use icrc_ledger_types::icrc1::account::{Account as IcrcAccount, Subaccount};
use serde::{Deserialize, Serialize};

///
/// AccountType
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum AccountType {
    Main,
    SubAccount,
    HardwareWallet,
}

///
/// Account
///
/// A wallet account as the dashboard shows it. `identifier` is the hex
/// account identifier on the ICP ledger and the ICRC-1 textual encoding on
/// ICRC ledgers.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Account {
    pub identifier: String,
    pub principal: Option<Principal>,
    pub balance: TokenAmount,
    pub sub_account: Option<Subaccount>,
    pub name: Option<String>,
    pub account_type: AccountType,
}

impl Account {
    /// ICRC-1 main account of `owner`.
    #[must_use]
    pub fn icrc_main(owner: Principal, balance: TokenAmount) -> Self {
        let icrc = IcrcAccount {
            owner,
            subaccount: None,
        };

        Self {
            identifier: icrc.to_string(),
            principal: Some(owner),
            balance,
            sub_account: None,
            name: None,
            account_type: AccountType::Main,
        }
    }

    /// The ICRC-1 account this entry maps to, when the owner is known.
    #[must_use]
    pub const fn icrc_account(&self) -> Option<IcrcAccount> {
        match self.principal {
            Some(owner) => Some(IcrcAccount {
                owner,
                subaccount: self.sub_account,
            }),
            None => None,
        }
    }

    #[must_use]
    pub fn is_main(&self) -> bool {
        self.account_type == AccountType::Main
    }
}
