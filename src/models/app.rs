//! App account types.

use serde::{Deserialize, Serialize};

/// Application account as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Application display name.
    pub name: String,

    /// Fee charged on incoming payments, in percent.
    pub fee_percents: f64,

    /// Per-currency balances.
    #[serde(default)]
    pub balances: Vec<AppBalance>,
}

/// Balance of one currency on the app account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBalance {
    /// Currency code.
    pub currency: String,

    /// Available balance.
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_app_info() {
        let json = r#"{
            "name": "Coffee Shop",
            "feePercents": 1.5,
            "balances": [
                {"currency": "TONCOIN", "balance": 102.35},
                {"currency": "USDT", "balance": 0}
            ]
        }"#;

        let info: AppInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.name, "Coffee Shop");
        assert_eq!(info.fee_percents, 1.5);
        assert_eq!(info.balances.len(), 2);
        assert_eq!(info.balances[1].balance, 0.0);
    }

    #[test]
    fn balances_default_to_empty() {
        let info: AppInfo = serde_json::from_str(r#"{"name": "x", "feePercents": 1}"#).unwrap();
        assert!(info.balances.is_empty());
    }
}
