use candid::CandidType;
use icrc_ledger_types::icrc1::account::Account as IcrcAccount;
use serde::{Deserialize, Serialize};

///
/// IcrcTransactionWithId
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IcrcTransactionWithId {
    pub id: u64,
    pub transaction: IcrcTransaction,
}

///
/// IcrcTransaction
/// One of `burn`, `mint`, `transfer` or `approve` is set, named by `kind`.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IcrcTransaction {
    pub kind: String,
    pub timestamp: u64,
    pub burn: Option<Burn>,
    pub mint: Option<Mint>,
    pub transfer: Option<Transfer>,
    pub approve: Option<Approve>,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Burn {
    pub from: IcrcAccount,
    pub amount: u64,
    pub memo: Option<Vec<u8>>,
    pub created_at_time: Option<u64>,
    pub spender: Option<IcrcAccount>,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Mint {
    pub to: IcrcAccount,
    pub amount: u64,
    pub memo: Option<Vec<u8>>,
    pub created_at_time: Option<u64>,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Transfer {
    pub from: IcrcAccount,
    pub to: IcrcAccount,
    pub amount: u64,
    pub fee: Option<u64>,
    pub memo: Option<Vec<u8>>,
    pub created_at_time: Option<u64>,
    pub spender: Option<IcrcAccount>,
}

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Approve {
    pub from: IcrcAccount,
    pub spender: IcrcAccount,
    pub amount: u64,
    pub fee: Option<u64>,
    pub expires_at: Option<u64>,
}

///
/// GetTransactions
/// One page of an account's history, newest first.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetTransactions {
    pub transactions: Vec<IcrcTransactionWithId>,
    pub oldest_tx_id: Option<u64>,
}
