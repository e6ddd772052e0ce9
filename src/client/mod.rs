//! HTTP client for the Rocket Pay API.
//!
//! [`PayClient`] owns one `reqwest::Client`, attaches the API key as the
//! `Rocket-Pay-Key` header, and unwraps the API's
//! `{success, data, message, errors}` response envelope. Per-resource
//! operations live in sibling files (`invoices`, `cheques`, `transfers`,
//! `withdrawals`, `app`).
//!
//! Every call is a single attempt: no retry, no backoff, no rate
//! limiting. Failures are surfaced as [`ApiError`] with the vendor's
//! message and field errors attached when the API provided them.

mod app;
mod cheques;
mod invoices;
mod transfers;
mod withdrawals;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ApiConfig, ConfigError};
use crate::error::{ApiError, FieldError};
use crate::webhook::WebhookVerifier;

/// Header carrying the application's API key on every request.
pub const API_KEY_HEADER: &str = "Rocket-Pay-Key";

/// Response envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Rocket Pay API client.
pub struct PayClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl PayClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration is invalid (empty API
    /// key); no request can be authenticated without credentials.
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            http: reqwest::Client::new(),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Webhook verifier keyed with this client's API key.
    pub fn webhook_verifier(&self) -> WebhookVerifier {
        self.config.webhook_verifier()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url(), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header(API_KEY_HEADER, self.config.api_key())
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.put(self.url(path)))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    /// Send a request and return the envelope's `data`.
    async fn execute<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        match self.dispatch::<T>(op, request).await? {
            Some(data) => Ok(data),
            None => Err(ApiError::decode(format!(
                "{}: response envelope carried no data",
                op
            ))),
        }
    }

    /// Send a request where success alone is the result (deletes).
    async fn execute_unit(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ApiError> {
        self.dispatch::<serde_json::Value>(op, request).await?;
        Ok(())
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation = op, error = %e, "request failed to send");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(operation = op, "API rejected the key");
            return Err(ApiError::unauthorized("API key rejected"));
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                tracing::warn!(operation = op, error = %e, "undecodable success response");
                return Err(ApiError::decode(format!("{}: {}", op, e)));
            }
            Err(_) => {
                // Failure body that isn't even the vendor envelope
                // (gateway error page and the like).
                tracing::warn!(operation = op, status = status.as_u16(), "request failed");
                return Err(ApiError::api(
                    status.as_u16(),
                    format!("HTTP {}", status.as_u16()),
                    Vec::new(),
                ));
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::warn!(
                operation = op,
                status = status.as_u16(),
                message = %message,
                "API reported failure"
            );
            return Err(ApiError::api(status.as_u16(), message, envelope.errors));
        }

        tracing::debug!(operation = op, "request succeeded");
        Ok(envelope.data)
    }
}
