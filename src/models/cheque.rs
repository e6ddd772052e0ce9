//! Multi-cheque types.
//!
//! A multi-cheque is a pot of funds split into equal per-user activations,
//! claimable through a shareable link.

use serde::{Deserialize, Serialize};

/// Multi-cheque lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChequeState {
    /// Claimable.
    Active,

    /// All activations used.
    Completed,

    /// Created but not yet funded/published.
    Draft,

    /// State value this SDK version does not know.
    Unknown,
}

impl ChequeState {
    /// Wire representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChequeState::Active => "active",
            ChequeState::Completed => "completed",
            ChequeState::Draft => "draft",
            ChequeState::Unknown => "unknown",
        }
    }
}

impl From<String> for ChequeState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => ChequeState::Active,
            "completed" => ChequeState::Completed,
            "draft" => ChequeState::Draft,
            _ => ChequeState::Unknown,
        }
    }
}

impl From<ChequeState> for String {
    fn from(state: ChequeState) -> Self {
        state.as_str().to_string()
    }
}

/// Multi-cheque as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cheque {
    /// Cheque identifier.
    pub id: i64,

    /// Currency code.
    pub currency: String,

    /// Total amount reserved for the cheque.
    pub total: f64,

    /// Amount each claimant receives.
    pub per_user: f64,

    /// Number of users who can claim.
    pub users: i64,

    /// Password required to claim, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Description shown on the claim page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the app is notified of each activation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notifications: Option<bool>,

    /// Whether claimants must pass a captcha.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_enabled: Option<bool>,

    /// Share of each claim paid to referrers, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_program_percents: Option<i64>,

    /// Referral reward per claimed activation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_reward_per_user: Option<f64>,

    /// Current state.
    pub state: ChequeState,

    /// Shareable claim link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Language codes the claim page refuses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_languages: Vec<String>,

    /// Country codes allowed to claim; empty means no restriction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_countries: Vec<String>,

    /// Restrict claiming to Telegram Premium users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_premium: Option<bool>,

    /// Require a linked wallet to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_wallet: Option<bool>,

    /// Activations claimed so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activations: Option<i64>,

    /// Referral rewards paid out so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_rewards: Option<i64>,
}

/// Parameters for creating a multi-cheque.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChequeRequest {
    /// Currency code.
    pub currency: String,

    /// Amount each claimant receives.
    pub cheque_per_user: f64,

    /// Number of users who can claim.
    pub users_number: i64,

    /// Share of each claim paid to referrers, in percent.
    pub ref_program: i64,

    /// Password required to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Description shown on the claim page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Notify the app on each activation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notifications: Option<bool>,

    /// Require claimants to pass a captcha.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_captcha: Option<bool>,

    /// Restrict claiming to Telegram Premium users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_premium: Option<bool>,

    /// Require a linked wallet to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_wallet: Option<bool>,

    /// Language codes to refuse on the claim page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_languages: Option<Vec<String>>,

    /// Country codes allowed to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_countries: Option<Vec<String>>,
}

impl CreateChequeRequest {
    /// Cheque paying `per_user` of `currency` to `users` claimants, with
    /// the referral program off and every option left unset.
    pub fn new(currency: impl Into<String>, per_user: f64, users: i64) -> Self {
        Self {
            currency: currency.into(),
            cheque_per_user: per_user,
            users_number: users,
            ref_program: 0,
            password: None,
            description: None,
            send_notifications: None,
            enable_captcha: None,
            for_premium: None,
            linked_wallet: None,
            disabled_languages: None,
            enabled_countries: None,
        }
    }
}

/// Parameters for editing an existing multi-cheque.
///
/// Only set fields are sent; everything else keeps its current value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditChequeRequest {
    /// Replace the claim password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Replace the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Toggle activation notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notifications: Option<bool>,

    /// Toggle the claim captcha.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_captcha: Option<bool>,

    /// Replace the refused language codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_languages: Option<Vec<String>>,

    /// Replace the allowed country codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_countries: Option<Vec<String>>,
}
