//! Invoice types.
//!
//! An invoice is a request for payment that one or many users can pay
//! through the bot. Wire names are camelCase throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    /// Accepting payments.
    Active,

    /// Fully paid.
    Paid,

    /// Expired before payment.
    Expired,

    /// Status value this SDK version does not know.
    Unknown,
}

impl InvoiceStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Active => "active",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Expired => "expired",
            InvoiceStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => InvoiceStatus::Active,
            "paid" => InvoiceStatus::Paid,
            "expired" => InvoiceStatus::Expired,
            _ => InvoiceStatus::Unknown,
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// One payment event against an invoice.
///
/// Multi-payment invoices accumulate several of these; single-payment
/// invoices carry exactly one once paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayment {
    /// Telegram identifier of the payer.
    pub user_id: i64,

    /// Sequence number of this payment (1-based).
    pub payment_num: i64,

    /// Amount the payer sent.
    pub payment_amount: f64,

    /// Amount credited to the app net of fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount_received: Option<f64>,

    /// Payer's free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When the payment was made.
    pub paid: DateTime<Utc>,
}

/// Invoice as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
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

    /// Currency code (e.g. `TONCOIN`).
    pub currency: String,

    /// Current status.
    pub status: InvoiceStatus,

    /// Public description shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Message revealed to the payer after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,

    /// Opaque payload echoed back in webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// URL opened after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Whether payers may attach comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_enabled: Option<bool>,

    /// Total activations the invoice allows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_activations: Option<i64>,

    /// Activations still available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activations_left: Option<i64>,

    /// Seconds until expiry, counted from creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_in: Option<i64>,

    /// Payment link to hand to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// When the invoice was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the invoice was fully paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<DateTime<Utc>>,

    /// Payments received so far.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<InvoicePayment>,
}

/// Parameters for creating an invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Invoice amount in `currency` units.
    pub amount: f64,

    /// Minimum accepted payment; enables multi-payment mode together with
    /// `num_payments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_payment: Option<f64>,

    /// Number of payments to accept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_payments: Option<i64>,

    /// Currency code.
    pub currency: String,

    /// Public description shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Message revealed to the payer after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,

    /// Whether payers may attach comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_enabled: Option<bool>,

    /// URL opened after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Opaque payload echoed back in webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// Seconds until expiry; 0 or absent means no expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_in: Option<i64>,
}

impl CreateInvoiceRequest {
    /// Invoice for `amount` of `currency` with every option left unset.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            min_payment: None,
            num_payments: None,
            currency: currency.into(),
            description: None,
            hidden_message: None,
            comments_enabled: None,
            callback_url: None,
            payload: None,
            expired_in: None,
        }
    }
}
