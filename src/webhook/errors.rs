//! Error types for webhook verification and parsing.
//!
//! Two disjoint failure kinds, never conflated: a signature failure carries
//! no detail at all, while a parse failure names the exact check that
//! rejected the payload.

use thiserror::Error;

/// Errors returned by the composed verify-and-parse entry point.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// Signature verification failed.
    ///
    /// Deliberately terse: no detail about why the signature was rejected
    /// is exposed to the caller.
    #[error("invalid signature")]
    InvalidSignature,

    /// The body was authentic but structurally or semantically invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Structural/semantic validation failures, one per check.
///
/// Validation is all-or-nothing: the first failing check wins and no
/// partial envelope is ever produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The request body was empty.
    #[error("empty body")]
    EmptyBody,

    /// The body was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The body parsed, but the top-level value is not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required envelope field (`type`, `timestamp`) is missing or empty.
    #[error("missing envelope field: {0}")]
    MissingEnvelopeField(&'static str),

    /// The `type` tag is well-formed but not a recognized update kind.
    #[error("unsupported update type: {0}")]
    UnsupportedType(String),

    /// The `data` field is missing or not an object.
    #[error("missing or invalid data object")]
    InvalidData,

    /// A required invoice field is absent from `data`.
    #[error("missing invoice field: {0}")]
    MissingInvoiceField(&'static str),

    /// The `data.payment` field is missing or not an object.
    #[error("missing or invalid payment object")]
    InvalidPayment,

    /// A required payment field is absent from `data.payment`.
    #[error("missing payment field: {0}")]
    MissingPaymentField(&'static str),
}
