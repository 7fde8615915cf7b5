//! Hardware wallet seam.
//!
//! A [`HardwareWallet`] opens a session on the device and yields a
//! [`LedgerIdentity`], the principal derived from the device key. Device
//! errors carry either a label key (translated by the toasts service) or a
//! ready-made message.

use crate::types::{Principal, Substitutions};
use async_trait::async_trait;
use derive_more::Display;
use std::rc::Rc;
use thiserror::Error as ThisError;

///
/// LedgerError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LedgerError {
    /// A known failure; `label_key` names its translation.
    #[error("{label_key}")]
    Key {
        label_key: String,
        substitutions: Option<Substitutions>,
    },

    #[error("{0}")]
    Message(String),

    #[error("device transport error: {0}")]
    Transport(String),
}

impl LedgerError {
    pub fn key(label_key: impl Into<String>) -> Self {
        Self::Key {
            label_key: label_key.into(),
            substitutions: None,
        }
    }

    pub fn key_with(label_key: impl Into<String>, substitutions: Substitutions) -> Self {
        Self::Key {
            label_key: label_key.into(),
            substitutions: Some(substitutions),
        }
    }
}

///
/// LedgerAppVersion
/// Version of the ICP app running on the device.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display("{major}.{minor}.{patch}")]
pub struct LedgerAppVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LedgerAppVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

///
/// LedgerIdentity
///

#[async_trait(?Send)]
pub trait LedgerIdentity {
    fn principal(&self) -> Principal;

    async fn show_address_and_pub_key_on_device(&self) -> Result<(), LedgerError>;

    async fn version(&self) -> Result<LedgerAppVersion, LedgerError>;
}

///
/// HardwareWallet
///

#[async_trait(?Send)]
pub trait HardwareWallet {
    async fn create(&self) -> Result<Rc<dyn LedgerIdentity>, LedgerError>;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_errors_display_their_label() {
        assert_eq!(
            LedgerError::key("error__ledger.please_open").to_string(),
            "error__ledger.please_open"
        );
        assert_eq!(LedgerAppVersion::new(2, 0, 6).to_string(), "2.0.6");
    }
}
