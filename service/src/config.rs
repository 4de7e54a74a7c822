//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ServiceError;

/// Configuration for a [`DisputeService`](crate::DisputeService).
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Simulated delay of ordinary actions, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Simulated delay of the arbitrator data fetch, in milliseconds.
    #[serde(default = "default_dashboard_latency_ms")]
    pub dashboard_latency_ms: u64,

    /// Directory holding the wallet flag file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Address used as plaintiff, evidence submitter and voter.
    #[serde(default = "default_wallet_address")]
    pub wallet_address: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_latency_ms() -> u64 {
    1000
}

fn default_dashboard_latency_ms() -> u64 {
    1500
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./dispute_data")
}

fn default_wallet_address() -> String {
    "0x1234...5678".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ServiceError> {
        toml::to_string_pretty(self).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// A configuration with no simulated delays.
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            dashboard_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn dashboard_latency(&self) -> Duration {
        Duration::from_millis(self.dashboard_latency_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            dashboard_latency_ms: default_dashboard_latency_ms(),
            data_dir: default_data_dir(),
            wallet_address: default_wallet_address(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = ServiceConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.latency_ms, 1000);
        assert_eq!(config.dashboard_latency_ms, 1500);
        assert_eq!(config.wallet_address, "0x1234...5678");
        assert_eq!(config.log_format, "human");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            latency_ms = 0
            wallet_address = "0xfeed...beef"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.wallet_address, "0xfeed...beef");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dispute.toml");
        std::fs::write(&path, "dashboard_latency_ms = 10\n").unwrap();
        let config = ServiceConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.dashboard_latency(), Duration::from_millis(10));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ServiceConfig::from_toml_file("/nonexistent/dispute.toml");
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }
}
