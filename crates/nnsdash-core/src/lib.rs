//! Core nnsdash library: application state, canister synchronization and
//! domain utilities for an Internet Computer governance and wallet dashboard.
//!
//! A renderer owns one [`context::AppContext`], subscribes to the stores in
//! [`store`] (or the projections in [`derived`]) and triggers the services in
//! [`services`]. Nothing here draws anything.
//!
//! ## Layering
//!
//! - `api/` declares the canister client seams (implemented elsewhere).
//! - `sync/` owns the query/update reconciliation helper.
//! - `services/` wires api calls through `sync` into stores and toasts.
//! - `store/` owns state; `derived/` projects it.
//! - `utils/` holds pure functions over decoded records.
//! - `wire/` holds raw canister shapes before mapping.
//!
//! The default flow is: services → sync → api, then services → store.

pub mod api;
pub mod config;
pub mod context;
pub mod derived;
pub mod error;
pub mod i18n;
pub mod log;
pub mod services;
pub mod store;
pub mod sync;
pub mod types;
pub mod utils;
pub mod wire;

#[cfg(test)]
pub(crate) mod test;

pub use {::candid, ::icrc_ledger_types};

pub use context::AppContext;
pub use error::{Error, ErrorClass};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
