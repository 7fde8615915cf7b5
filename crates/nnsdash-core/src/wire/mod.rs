//!
//! Wire-level shapes returned by canisters before they are mapped into
//! [`crate::types`].
//!

pub mod icrc;
