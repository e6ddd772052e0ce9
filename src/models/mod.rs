//! Request and response types for the Rocket Pay API.
//!
//! Wire names are camelCase; request structs serialize only the fields the
//! caller set, response structs keep "not provided" distinct from zero via
//! `Option`.

mod app;
mod cheque;
mod currency;
mod invoice;
mod pagination;
mod transfer;
mod withdrawal;

pub use app::{AppBalance, AppInfo};
pub use cheque::{Cheque, ChequeState, CreateChequeRequest, EditChequeRequest};
pub use currency::CurrencyInfo;
pub use invoice::{CreateInvoiceRequest, Invoice, InvoicePayment, InvoiceStatus};
pub use pagination::{PageRequest, Paginated};
pub use transfer::{CreateTransferRequest, Transfer};
pub use withdrawal::{
    CreateWithdrawalRequest, Withdrawal, WithdrawalFee, WithdrawalFees, WithdrawalStatus,
};
