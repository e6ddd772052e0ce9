//! Multi-cheque operations.

use crate::error::ApiError;
use crate::models::{Cheque, CreateChequeRequest, EditChequeRequest, PageRequest, Paginated};

use super::PayClient;

impl PayClient {
    /// Create a multi-cheque funded from the app balance.
    pub async fn create_cheque(&self, request: &CreateChequeRequest) -> Result<Cheque, ApiError> {
        self.execute("create_cheque", self.post("/multi-cheque").json(request))
            .await
    }

    /// Fetch one multi-cheque by id.
    pub async fn get_cheque(&self, cheque_id: i64) -> Result<Cheque, ApiError> {
        self.execute(
            "get_cheque",
            self.get(&format!("/multi-cheque/{}", cheque_id)),
        )
        .await
    }

    /// List multi-cheques.
    pub async fn list_cheques(&self, page: PageRequest) -> Result<Paginated<Cheque>, ApiError> {
        self.execute("list_cheques", self.get("/multi-cheque").query(&page))
            .await
    }

    /// Edit a multi-cheque. Only the set fields change.
    pub async fn edit_cheque(
        &self,
        cheque_id: i64,
        request: &EditChequeRequest,
    ) -> Result<Cheque, ApiError> {
        self.execute(
            "edit_cheque",
            self.put(&format!("/multi-cheque/{}", cheque_id)).json(request),
        )
        .await
    }

    /// Delete a multi-cheque; unclaimed funds return to the app balance.
    pub async fn delete_cheque(&self, cheque_id: i64) -> Result<(), ApiError> {
        self.execute_unit(
            "delete_cheque",
            self.delete(&format!("/multi-cheque/{}", cheque_id)),
        )
        .await
    }
}
