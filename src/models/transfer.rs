//! App-to-user transfer types.

use serde::{Deserialize, Serialize};

/// Completed transfer as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Transfer identifier assigned by the API.
    pub id: i64,

    /// Telegram identifier of the recipient.
    pub tg_user_id: i64,

    /// Currency code.
    pub currency: String,

    /// Amount sent.
    pub amount: f64,

    /// Description shown to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for sending a transfer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    /// Telegram identifier of the recipient.
    pub tg_user_id: i64,

    /// Currency code.
    pub currency: String,

    /// Amount to send.
    pub amount: f64,

    /// Client-chosen unique identifier. The API deduplicates on it, so a
    /// resend with the same value cannot pay twice.
    pub transfer_id: String,

    /// Description shown to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
