//! Runtime settings for an [`OrderSystem`](super::OrderSystem).
//!
//! Every field has a default, so an empty file (or no file) is a valid configuration:
//!
//! ```toml
//! channel_buffer = 32
//! stock_policy = "consume"         # or "release"
//! payment_failure = "reject"       # or "record_failed"
//! payment_success_rate = 0.5
//! ```

use crate::service::{PaymentFailurePolicy, StockPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming a TOML file to load settings from.
pub const CONFIG_ENV_VAR: &str = "ORDER_SERVICE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Capacity of each record actor's request channel.
    pub channel_buffer: usize,
    pub stock_policy: StockPolicy,
    pub payment_failure: PaymentFailurePolicy,
    /// Probability that the simulated payment is approved.
    pub payment_success_rate: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            stock_policy: StockPolicy::Consume,
            payment_failure: PaymentFailurePolicy::Reject,
            payment_success_rate: 0.5,
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `ORDER_SERVICE_CONFIG`, or the defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!(path = ?path, "Loading configuration");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid(
                "channel_buffer must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.payment_success_rate) {
            return Err(ConfigError::Invalid(format!(
                "payment_success_rate must be between 0 and 1, got {}",
                self.payment_success_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.stock_policy, StockPolicy::Consume);
        assert_eq!(config.payment_failure, PaymentFailurePolicy::Reject);
    }

    #[test]
    fn test_policies_parse() {
        let config = ServiceConfig::from_toml_str(
            r#"
            stock_policy = "release"
            payment_failure = "record_failed"
            payment_success_rate = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.stock_policy, StockPolicy::Release);
        assert_eq!(config.payment_failure, PaymentFailurePolicy::RecordFailed);
        assert_eq!(config.payment_success_rate, 1.0);
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ServiceConfig::from_toml_str("retries = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ServiceConfig::from_toml_str(r#"stock_policy = "refund""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = ServiceConfig::from_toml_str("payment_success_rate = 1.5").unwrap_err();
        assert!(err.to_string().contains("payment_success_rate"));

        let err = ServiceConfig::from_toml_str("channel_buffer = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("order-service-{}.toml", std::process::id()));
        std::fs::write(&path, "channel_buffer = 8\n").unwrap();

        let config = ServiceConfig::from_file(&path).unwrap();
        assert_eq!(config.channel_buffer, 8);
        std::fs::remove_file(&path).unwrap();

        let err = ServiceConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
