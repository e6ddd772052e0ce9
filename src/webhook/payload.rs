//! Webhook payload parsing and validation.
//!
//! Turns a raw request body into a trusted, typed [`WebhookEnvelope`].
//! The body is first parsed into an untyped JSON tree, then walked through
//! an ordered sequence of shape checks; the typed envelope is constructed
//! only after every check passes. Deserializing straight into the target
//! type would let missing fields zero-fill and silently accept invalid
//! payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{InvoicePayment, InvoiceStatus};

use super::errors::ParseError;

/// Update type tag carried by invoice payment notifications.
pub const INVOICE_PAY: &str = "invoicePay";

/// Envelope fields that must be present and non-empty for any update kind.
const REQUIRED_ENVELOPE_FIELDS: [&str; 2] = ["type", "timestamp"];

/// Invoice fields that must be present on `data`.
const REQUIRED_INVOICE_FIELDS: [&str; 5] = ["id", "amount", "currency", "status", "payment"];

/// Payment fields that must be present on `data.payment`.
const REQUIRED_PAYMENT_FIELDS: [&str; 4] = ["userId", "paymentNum", "paymentAmount", "paid"];

/// Outer shape of an inbound notification.
///
/// Transient: constructed by parsing one inbound message, consumed by the
/// caller, and discarded. Carries no identity beyond the single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// Update kind tag. Always [`INVOICE_PAY`] for envelopes produced by
    /// [`parse_payload`].
    #[serde(rename = "type")]
    pub update_type: String,

    /// ISO-8601 creation time of the notification. Informational only;
    /// not used for replay protection.
    pub timestamp: String,

    /// The invoice that received a payment.
    pub data: InvoicePaymentData,
}

/// Invoice snapshot delivered with an `invoicePay` update.
///
/// Mirrors the invoice's public fields plus the one payment event that
/// triggered the notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentData {
    /// Invoice identifier.
    pub id: i64,

    /// Invoice amount in `currency` units.
    pub amount: f64,

    /// Minimum accepted payment for multi-payment invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_payment: Option<f64>,

    /// Number of payments the invoice accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_payments: Option<i64>,

    /// Invoice currency code (e.g. `TONCOIN`).
    pub currency: String,

    /// Current invoice status.
    pub status: InvoiceStatus,

    /// Public description shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque payload echoed back from invoice creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// Message revealed to the payer after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,

    /// Callback URL opened after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Total number of activations the invoice allows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_activations: Option<i64>,

    /// Activations still available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activations_left: Option<i64>,

    /// When the invoice was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the invoice was fully paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<DateTime<Utc>>,

    /// The payment event this notification describes.
    pub payment: InvoicePayment,
}

/// Validate and type a raw webhook body.
///
/// Runs the shape checks in order, short-circuiting on the first failure:
/// non-empty body, JSON syntax, top-level object, envelope fields, known
/// update type, `data` object, required invoice fields, `payment` object,
/// required payment fields. Only then is the typed envelope built.
///
/// # Errors
///
/// Returns the [`ParseError`] naming the first check that failed. No
/// partial envelope is ever returned.
pub fn parse_payload(body: &str) -> Result<WebhookEnvelope, ParseError> {
    if body.is_empty() {
        return Err(ParseError::EmptyBody);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    let root = value.as_object().ok_or(ParseError::NotAnObject)?;

    for field in REQUIRED_ENVELOPE_FIELDS {
        match root.get(field).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => {}
            _ => return Err(ParseError::MissingEnvelopeField(field)),
        }
    }

    let update_type = root["type"].as_str().unwrap_or_default();
    if update_type != INVOICE_PAY {
        return Err(ParseError::UnsupportedType(update_type.to_string()));
    }

    let data = root
        .get("data")
        .and_then(Value::as_object)
        .ok_or(ParseError::InvalidData)?;

    for field in REQUIRED_INVOICE_FIELDS {
        if data.get(field).is_none_or(Value::is_null) {
            return Err(ParseError::MissingInvoiceField(field));
        }
    }

    let payment = data
        .get("payment")
        .and_then(Value::as_object)
        .ok_or(ParseError::InvalidPayment)?;

    for field in REQUIRED_PAYMENT_FIELDS {
        if payment.get(field).is_none_or(Value::is_null) {
            return Err(ParseError::MissingPaymentField(field));
        }
    }

    // Shape is known good; a residual mismatch here is a type error in a
    // present field (e.g. a string where a number belongs).
    serde_json::from_value(value).map_err(|e| ParseError::InvalidJson(e.to_string()))
}
