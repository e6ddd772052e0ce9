//! Withdrawal types.
//!
//! Withdrawals move funds from the app balance to an external blockchain
//! address. Statuses arrive in SCREAMING_SNAKE_CASE on the wire.

use serde::{Deserialize, Serialize};

/// Withdrawal processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WithdrawalStatus {
    /// Accepted, not yet broadcast.
    Created,

    /// Confirmed on chain.
    Completed,

    /// Failed; funds returned to the app balance.
    Fail,

    /// Status value this SDK version does not know.
    Unknown,
}

impl WithdrawalStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Created => "CREATED",
            WithdrawalStatus::Completed => "COMPLETED",
            WithdrawalStatus::Fail => "FAIL",
            WithdrawalStatus::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for WithdrawalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CREATED" => WithdrawalStatus::Created,
            "COMPLETED" => WithdrawalStatus::Completed,
            "FAIL" => WithdrawalStatus::Fail,
            _ => WithdrawalStatus::Unknown,
        }
    }
}

impl From<WithdrawalStatus> for String {
    fn from(status: WithdrawalStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Withdrawal as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Blockchain network code (e.g. `TON`).
    pub network: String,

    /// Destination address.
    pub address: String,

    /// Currency code.
    pub currency: String,

    /// Amount withdrawn.
    pub amount: f64,

    /// Client-chosen unique identifier.
    pub withdrawal_id: String,

    /// Current processing status.
    pub status: WithdrawalStatus,

    /// Free-text comment attached by the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Transaction hash once broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,

    /// Block-explorer link once broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_link: Option<String>,
}

/// Parameters for creating a withdrawal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWithdrawalRequest {
    /// Blockchain network code.
    pub network: String,

    /// Destination address.
    pub address: String,

    /// Currency code.
    pub currency: String,

    /// Amount to withdraw.
    pub amount: f64,

    /// Client-chosen unique identifier. The API deduplicates on it.
    pub withdrawal_id: String,

    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Withdrawal fee schedule for one currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalFees {
    /// Currency code the schedule applies to.
    pub currency: String,

    /// Minimum withdrawable amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_withdraw: Option<f64>,

    /// Per-network fees.
    #[serde(default)]
    pub fees: Vec<WithdrawalFee>,
}

/// Fee for withdrawing over one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalFee {
    /// Blockchain network code.
    pub network_code: String,

    /// Flat fee charged, in `fee_currency` units.
    pub fee: f64,

    /// Currency the fee is charged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
}
