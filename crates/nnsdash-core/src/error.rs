use crate::{api::ApiError, api::hardware_wallet::LedgerError, config::ConfigError};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error.
///
/// Services never hand transport failures to the renderer; they surface them
/// through toasts. This type is what flows between the api seam, the
/// reconciliation helper and the callbacks a service registers.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("no authenticated identity")]
    NoIdentity,

    #[error("{0}")]
    Invalid(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Api(_) => ErrorClass::Api,
            Self::Config(_) => ErrorClass::Config,
            Self::Ledger(_) => ErrorClass::Ledger,
            Self::NoIdentity => ErrorClass::Identity,
            Self::Invalid(_) => ErrorClass::Invalid,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Api,
    Config,
    Identity,
    Invalid,
    Ledger,
}

///
/// TESTS
///
