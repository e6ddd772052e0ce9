//! App account operations.

use crate::error::ApiError;
use crate::models::{AppInfo, CurrencyInfo};

use super::PayClient;

impl PayClient {
    /// Fetch the application's name, fee, and balances.
    pub async fn app_info(&self) -> Result<AppInfo, ApiError> {
        self.execute("app_info", self.get("/app/info")).await
    }

    /// List the currencies the API supports, with their limits and fees.
    pub async fn available_currencies(&self) -> Result<Vec<CurrencyInfo>, ApiError> {
        self.execute("available_currencies", self.get("/currencies/available"))
            .await
    }
}
