//! Invoice operations.

use crate::error::ApiError;
use crate::models::{CreateInvoiceRequest, Invoice, PageRequest, Paginated};

use super::PayClient;

impl PayClient {
    /// Create an invoice and return it with its payment link.
    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice, ApiError> {
        self.execute("create_invoice", self.post("/tg-invoices").json(request))
            .await
    }

    /// Fetch one invoice by id.
    pub async fn get_invoice(&self, invoice_id: i64) -> Result<Invoice, ApiError> {
        self.execute(
            "get_invoice",
            self.get(&format!("/tg-invoices/{}", invoice_id)),
        )
        .await
    }

    /// List invoices, newest first.
    pub async fn list_invoices(&self, page: PageRequest) -> Result<Paginated<Invoice>, ApiError> {
        self.execute("list_invoices", self.get("/tg-invoices").query(&page))
            .await
    }

    /// Delete an invoice. Pending payment links stop working immediately.
    pub async fn delete_invoice(&self, invoice_id: i64) -> Result<(), ApiError> {
        self.execute_unit(
            "delete_invoice",
            self.delete(&format!("/tg-invoices/{}", invoice_id)),
        )
        .await
    }
}
