mod log;
mod network;

pub use log::*;
pub use network::*;

use crate::sync::Strategy;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.network.validate()?;
        self.sync.validate()?;
        self.ledger.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

///
/// Defaults
///

mod defaults {
    pub const fn transaction_page_size() -> u64 {
        100
    }

    pub const fn toast_duration_ms() -> u64 {
        4_000
    }

    pub const fn enabled() -> bool {
        true
    }

    pub fn min_app_version() -> String {
        "2.0.6".to_string()
    }
}

pub const MAX_TRANSACTION_PAGE_SIZE: u64 = 1_000;

///
/// SyncConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default)]
    pub default_strategy: Strategy,

    #[serde(default = "defaults::transaction_page_size")]
    pub transaction_page_size: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::default(),
            transaction_page_size: defaults::transaction_page_size(),
        }
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.transaction_page_size == 0 || self.transaction_page_size > MAX_TRANSACTION_PAGE_SIZE
        {
            return Err(ConfigSchemaError::ValidationError(format!(
                "sync.transaction_page_size {} must be within 1..={MAX_TRANSACTION_PAGE_SIZE}",
                self.transaction_page_size
            )));
        }

        Ok(())
    }
}

///
/// ToastsConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToastsConfig {
    /// Lifetime of success toasts; error toasts stay until dismissed.
    #[serde(default = "defaults::toast_duration_ms")]
    pub default_duration_ms: u64,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: defaults::toast_duration_ms(),
        }
    }
}

///
/// FeaturesConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesConfig {
    #[serde(default = "defaults::enabled")]
    pub enable_ckbtc_ledger: bool,

    /// Offer "receive" on the ckBTC token row.
    #[serde(default)]
    pub enable_ckbtc_receive: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            enable_ckbtc_ledger: defaults::enabled(),
            enable_ckbtc_receive: false,
        }
    }
}

///
/// LedgerConfig
/// Hardware wallet settings.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    #[serde(default = "defaults::min_app_version")]
    pub min_app_version: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_app_version: defaults::min_app_version(),
        }
    }
}

impl Validate for LedgerConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        crate::utils::version::parse_version(&self.min_app_version).ok_or_else(|| {
            ConfigSchemaError::ValidationError(format!(
                "ledger.min_app_version '{}' is not a semver triple",
                self.min_app_version
            ))
        })?;

        Ok(())
    }
}
