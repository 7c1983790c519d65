//! Configuration loading from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use crate::config::schema::{DemoConfig, ListenerConfig, ObservabilityConfig, DEFAULT_PORT};

pub const PORT_VAR: &str = "PORT";
pub const METRICS_ADDRESS_VAR: &str = "METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid METRICS_ADDRESS {value:?}: {source}")]
    InvalidMetricsAddress {
        value: String,
        source: AddrParseError,
    },
}

impl DemoConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let metrics_address = match get(METRICS_ADDRESS_VAR) {
            Some(value) => Some(
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::InvalidMetricsAddress { value, source })?,
            ),
            None => None,
        };

        Ok(Self {
            listener: ListenerConfig {
                port,
                ..ListenerConfig::default()
            },
            observability: ObservabilityConfig { metrics_address },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_port_defaults_to_8080() {
        let config = load(&[]).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.bind_address().to_string(), "0.0.0.0:8080");
        assert_eq!(config.observability.metrics_address, None);
    }

    #[test]
    fn test_empty_port_defaults_to_8080() {
        let config = load(&[("PORT", "")]).unwrap();
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn test_port_from_env() {
        let config = load(&[("PORT", "9090")]).unwrap();
        assert_eq!(config.listener.bind_address().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("PORT", "abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "abc"));

        let err = load(&[("PORT", "70000")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid PORT \"70000\""));
    }

    #[test]
    fn test_metrics_disabled_unless_set() {
        let config = load(&[("PORT", "9090")]).unwrap();
        assert_eq!(config.observability.metrics_address, None);

        let config = load(&[("PORT", "9090"), ("METRICS_ADDRESS", "")]).unwrap();
        assert_eq!(config.observability.metrics_address, None);
        assert_eq!(config.listener.port, 9090);
    }

    #[test]
    fn test_metrics_address() {
        let config = load(&[("METRICS_ADDRESS", "127.0.0.1:9100")]).unwrap();
        assert_eq!(
            config.observability.metrics_address,
            Some("127.0.0.1:9100".parse().unwrap())
        );

        assert!(matches!(
            load(&[("METRICS_ADDRESS", "not-an-address")]),
            Err(ConfigError::InvalidMetricsAddress { .. })
        ));
    }
}
