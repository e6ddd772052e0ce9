//! App-to-user transfer operations.

use crate::error::ApiError;
use crate::models::{CreateTransferRequest, Transfer};

use super::PayClient;

impl PayClient {
    /// Send funds from the app balance to a Telegram user.
    ///
    /// The API deduplicates on `transfer_id`, so resending an identical
    /// request after a network failure cannot pay twice.
    pub async fn transfer(&self, request: &CreateTransferRequest) -> Result<Transfer, ApiError> {
        self.execute("transfer", self.post("/app/transfer").json(request))
            .await
    }
}
