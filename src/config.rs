use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `SIZEFIT_` prefix, for example: `SIZEFIT_SERVER__PORT=8097`,
/// `SIZEFIT_POLICY__MIN_STATISTICAL_CONFIDENCE=0.6`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Arbitration policy constants
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8097
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

/// Named, per-deployment overridable arbitration constants.
///
/// These are policy values, not reverse-engineered truths; tuning them is
/// expected.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Minimum statistical confidence for the envelope to be accepted
    /// as-is; below it the arbiter falls back to rule-based scoring
    #[serde(default = "default_min_statistical_confidence")]
    pub min_statistical_confidence: f64,

    /// Distance penalty for sizes on the wrong side of the fit preference
    #[serde(default = "default_fit_preference_bias")]
    pub fit_preference_bias: f64,

    /// Maximum confidence gap for an alternative to count as close
    #[serde(default = "default_close_alternative_margin")]
    pub close_alternative_margin: f64,

    /// Typical range width in cm for chart dimensions that only carry
    /// reference values
    #[serde(default = "default_fallback_range_width_cm")]
    pub fallback_range_width_cm: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_statistical_confidence: default_min_statistical_confidence(),
            fit_preference_bias: default_fit_preference_bias(),
            close_alternative_margin: default_close_alternative_margin(),
            fallback_range_width_cm: default_fallback_range_width_cm(),
        }
    }
}

fn default_min_statistical_confidence() -> f64 {
    0.5
}

fn default_fit_preference_bias() -> f64 {
    0.35
}

fn default_close_alternative_margin() -> f64 {
    0.15
}

fn default_fallback_range_width_cm() -> f64 {
    6.0
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `SIZEFIT_` and use
    /// double underscores for nested values:
    /// - `SIZEFIT_SERVER__PORT` -> server.port
    /// - `SIZEFIT_POLICY__MIN_STATISTICAL_CONFIDENCE` -> policy.min_statistical_confidence
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SIZEFIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
