//! Client configuration.
//!
//! The API key doubles as the webhook signing secret: the key that
//! authenticates outbound calls is the one Rocket Pay derives the
//! signature key from for inbound notifications.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::webhook::WebhookVerifier;

/// Production API endpoint.
pub const MAINNET_BASE_URL: &str = "https://pay.ton-rocket.com";

/// Testnet API endpoint.
pub const TESTNET_BASE_URL: &str = "https://dev-pay.ton-rocket.com";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration value is missing or empty.
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),
}

/// Rocket Pay API configuration.
#[derive(Clone)]
pub struct ApiConfig {
    /// Application API key, issued by the pay bot.
    api_key: SecretString,

    /// Base URL requests are sent to.
    api_base_url: String,
}

impl ApiConfig {
    /// Create a mainnet configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: MAINNET_BASE_URL.to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `ROCKETPAY_API_KEY` (required)
    /// - `ROCKETPAY_API_BASE_URL` (optional, overrides the default)
    /// - `ROCKETPAY_TESTNET` (optional, `true`/`1` selects the testnet
    ///   endpoint when no explicit base URL is set)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("ROCKETPAY_API_KEY")
            .map_err(|_| ConfigError::MissingRequired("ROCKETPAY_API_KEY"))?;
        let testnet = std::env::var("ROCKETPAY_TESTNET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let mut config = Self::new(api_key).with_testnet(testnet);
        if let Ok(url) = std::env::var("ROCKETPAY_API_BASE_URL") {
            config = config.with_base_url(url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set a custom API base URL (for testing against a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Select the testnet or mainnet endpoint.
    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.api_base_url = if testnet {
            TESTNET_BASE_URL.to_string()
        } else {
            MAINNET_BASE_URL.to_string()
        };
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequired` when the API key is empty —
    /// no request can be authenticated without one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingRequired("api key"));
        }
        Ok(())
    }

    /// Base URL requests are sent to.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// The API key, exposed for header construction.
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Build a webhook verifier keyed with this configuration's API key.
    pub fn webhook_verifier(&self) -> WebhookVerifier {
        WebhookVerifier::new(self.api_key.expose_secret().clone())
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SecretString already redacts; keep the derive-free impl so the
        // key can never leak through debug logging.
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
