//! API configuration

use serde::Deserialize;

/// API configuration
///
/// Loaded from the environment with the `API_` prefix, e.g. `API_PORT=8080`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Base URL of the external customer service
    pub customer_service_url: String,
    /// Base URL of the external policy service
    pub policy_service_url: String,
    /// Timeout for external service calls, in seconds
    pub gateway_timeout_secs: u64,
    /// Whether status updates must follow the lifecycle transition table
    pub enforce_status_transitions: bool,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/claims".to_string(),
            customer_service_url: "http://localhost:8081".to_string(),
            policy_service_url: "http://localhost:8082".to_string(),
            gateway_timeout_secs: 10,
            enforce_status_transitions: false,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(!config.enforce_status_transitions);
    }
}
