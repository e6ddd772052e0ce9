//! Supported-currency metadata.

use serde::{Deserialize, Serialize};

/// Limits and fees for one currency the API supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Currency code (e.g. `TONCOIN`).
    pub currency: String,

    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Minimum transfer amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_transfer: Option<f64>,

    /// Minimum per-user cheque amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cheque: Option<f64>,

    /// Minimum invoice amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_invoice: Option<f64>,

    /// Minimum withdrawal amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_withdraw: Option<f64>,

    /// Flat withdrawal fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_withdraw: Option<f64>,
}
