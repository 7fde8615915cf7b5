mod account;
mod identity;
mod neuron;
mod token;
mod toast;
mod transaction;
mod universe;

pub use account::*;
pub use identity::*;
pub use neuron::*;
pub use token::*;
pub use toast::*;
pub use transaction::*;
pub use universe::*;

pub use candid::Principal;
pub use icrc_ledger_types::icrc1::account::{Account as IcrcAccount, Subaccount};
