//! Withdrawal operations.

use crate::error::ApiError;
use crate::models::{CreateWithdrawalRequest, Withdrawal, WithdrawalFees};

use super::PayClient;

impl PayClient {
    /// Withdraw funds from the app balance to an external address.
    ///
    /// The API deduplicates on `withdrawal_id`.
    pub async fn withdrawal(
        &self,
        request: &CreateWithdrawalRequest,
    ) -> Result<Withdrawal, ApiError> {
        self.execute("withdrawal", self.post("/app/withdrawal").json(request))
            .await
    }

    /// Fetch the current status of a withdrawal by its client-chosen id.
    pub async fn withdrawal_status(&self, withdrawal_id: &str) -> Result<Withdrawal, ApiError> {
        self.execute(
            "withdrawal_status",
            self.get(&format!("/app/withdrawal/status/{}", withdrawal_id)),
        )
        .await
    }

    /// Fetch withdrawal fee schedules, optionally for one currency.
    pub async fn withdrawal_fees(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalFees>, ApiError> {
        let mut request = self.get("/app/withdrawal/fees");
        if let Some(currency) = currency {
            request = request.query(&[("currency", currency)]);
        }
        self.execute("withdrawal_fees", request).await
    }
}
