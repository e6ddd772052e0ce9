//! Interpretation helpers for validated webhook envelopes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::InvoiceStatus;

use super::payload::WebhookEnvelope;

/// Flat projection of an invoice payment notification.
///
/// Fields absent from the source payload stay `None`; nothing is defaulted,
/// so "zero" and "not provided" remain distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummary {
    /// Invoice identifier.
    pub invoice_id: i64,

    /// Invoice amount.
    pub amount: f64,

    /// Invoice currency code.
    pub currency: String,

    /// Invoice status at notification time.
    pub status: InvoiceStatus,

    /// Telegram identifier of the payer.
    pub user_id: i64,

    /// Sequence number of this payment against the invoice.
    pub payment_num: i64,

    /// Amount the payer sent.
    pub payment_amount: f64,

    /// Amount received net of fee, when reported.
    pub payment_amount_received: Option<f64>,

    /// When the payment was made.
    pub paid_at: DateTime<Utc>,

    /// Payer's free-text comment, if any.
    pub comment: Option<String>,

    /// Opaque payload from invoice creation, if any.
    pub payload: Option<String>,

    /// Invoice description, if any.
    pub description: Option<String>,

    /// Total activations the invoice allows, when reported.
    pub total_activations: Option<i64>,

    /// Activations still available, when reported.
    pub activations_left: Option<i64>,
}

impl WebhookEnvelope {
    /// True exactly when the invoice status is `paid`.
    pub fn is_paid(&self) -> bool {
        self.data.status == InvoiceStatus::Paid
    }

    /// Project the envelope into a flat [`PaymentSummary`].
    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary {
            invoice_id: self.data.id,
            amount: self.data.amount,
            currency: self.data.currency.clone(),
            status: self.data.status,
            user_id: self.data.payment.user_id,
            payment_num: self.data.payment.payment_num,
            payment_amount: self.data.payment.payment_amount,
            payment_amount_received: self.data.payment.payment_amount_received,
            paid_at: self.data.payment.paid,
            comment: self.data.payment.comment.clone(),
            payload: self.data.payload.clone(),
            description: self.data.description.clone(),
            total_activations: self.data.total_activations,
            activations_left: self.data.activations_left,
        }
    }
}
