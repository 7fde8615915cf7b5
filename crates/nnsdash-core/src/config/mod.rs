pub mod schema;

use crate::log::Topic;
use schema::{ConfigSchemaError, Validate};
use std::sync::Arc;
use thiserror::Error as ThisError;

pub use schema::ConfigModel;

/// Errors related to configuration parsing.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///
/// Loads and validates a [`ConfigModel`]. The result is handed to the
/// [`AppContext`](crate::context::AppContext) that owns it; there is no
/// process-wide config.
///

pub struct Config;

impl Config {
    /// Parse and validate a TOML config.
    pub fn from_toml(config_str: &str) -> Result<Arc<ConfigModel>, ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        Self::from_model(config)
    }

    /// Validate an in-memory model.
    pub fn from_model(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        config.validate()?;

        crate::log!(
            Topic::Config,
            Info,
            "config loaded (network: {}, testnet: {})",
            config.network.dfx_network,
            config.network.is_testnet()
        );

        Ok(Arc::new(config))
    }

    /// Render a config back to TOML.
    pub fn to_toml(config: &ConfigModel) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::Strategy;

    const TOML: &str = r#"
        [network]
        dfx_network = "local"
        host = "http://localhost:8080"
        fetch_root_key = true
        ckbtc_universe_canister_id = "mxzaz-hqaaa-aaaar-qaada-cai"
        ckbtc_index_canister_id = "n5wcd-faaaa-aaaar-qaaea-cai"

        [sync]
        default_strategy = "query"
        transaction_page_size = 20

        [features]
        enable_ckbtc_receive = true
    "#;

    #[test]
    fn parses_sections_and_defaults() {
        let cfg = Config::from_toml(TOML).unwrap();

        assert!(cfg.network.is_testnet());
        assert_eq!(cfg.sync.default_strategy, Strategy::Query);
        assert_eq!(cfg.sync.transaction_page_size, 20);
        assert!(cfg.features.enable_ckbtc_receive);
        assert!(cfg.features.enable_ckbtc_ledger);
        assert_eq!(cfg.toasts.default_duration_ms, 4_000);
        assert_eq!(
            cfg.network.ckbtc_universe_canister_id.map(|p| p.to_text()),
            Some("mxzaz-hqaaa-aaaar-qaada-cai".to_string())
        );
    }

    #[test]
    fn empty_config_is_mainnet() {
        let cfg = Config::from_toml("").unwrap();

        assert!(!cfg.network.is_testnet());
        assert_eq!(
            cfg.network.own_canister_id.to_text(),
            "qoctq-giaaa-aaaaa-aaaea-cai"
        );
        assert_eq!(
            cfg.network.icp_ledger_canister_id.to_text(),
            "ryjl3-tyaaa-aaaaa-aaaba-cai"
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = Config::from_toml("[sync]\nbogus = 1").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = Config::from_toml("[sync]\ntransaction_page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSchema(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = Config::from_toml(TOML).unwrap();
        let rendered = Config::to_toml(&cfg).unwrap();
        let again = Config::from_toml(&rendered).unwrap();

        assert_eq!(again.sync.transaction_page_size, 20);
    }
}
