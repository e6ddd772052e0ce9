//! Rocket Pay SDK
//!
//! Client for the Rocket Pay API (invoices, multi-cheques, transfers,
//! withdrawals, app info) plus verification and parsing of the payment
//! notifications the API delivers to your webhook endpoint.
//!
//! # Outbound calls
//!
//! ```no_run
//! use rocketpay::{ApiConfig, PayClient};
//! use rocketpay::models::CreateInvoiceRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PayClient::new(ApiConfig::from_env()?)?;
//! let invoice = client
//!     .create_invoice(&CreateInvoiceRequest::new(1.5, "TONCOIN"))
//!     .await?;
//! println!("pay here: {}", invoice.link.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Inbound webhooks
//!
//! Hand the raw request body and the `rocket-pay-signature` header to
//! [`webhook::verify_and_parse`]; see [`webhook`] for the signing scheme.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod webhook;

pub use client::PayClient;
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiErrorCode};
