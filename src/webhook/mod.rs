//! Webhook authentication and parsing.
//!
//! Rocket Pay signs every notification it delivers: the value of the
//! `rocket-pay-signature` header is the lowercase hex HMAC-SHA256 of the
//! raw request body, keyed with the SHA-256 digest of the application's
//! API key. The same key that authenticates outbound calls authenticates
//! inbound webhooks.
//!
//! The host server reads the raw body and the signature header and hands
//! both to [`verify_and_parse`] (or to a [`WebhookVerifier`] with the
//! token bound once). Verification always runs before parsing: an
//! unauthenticated body is never interpreted, even if it happens to be
//! well-formed JSON.
//!
//! Everything here is synchronous, pure, and stateless; concurrent
//! invocations need no coordination.
//!
//! ```no_run
//! use rocketpay::webhook;
//!
//! # fn handle(raw_body: &str, signature: &str) -> Result<(), webhook::WebhookError> {
//! let envelope = webhook::verify_and_parse(raw_body, signature, "your-api-key")?;
//! if envelope.is_paid() {
//!     let summary = envelope.summary();
//!     println!("invoice {} paid by {}", summary.invoice_id, summary.user_id);
//! }
//! # Ok(())
//! # }
//! ```

mod errors;
mod payload;
mod summary;
mod verifier;

pub use errors::{ParseError, WebhookError};
pub use payload::{parse_payload, InvoicePaymentData, WebhookEnvelope, INVOICE_PAY};
pub use summary::PaymentSummary;
pub use verifier::verify_signature;

use secrecy::{ExposeSecret, SecretString};

/// Authenticate a raw webhook body and parse it into a typed envelope.
///
/// Fails fast at the first failing stage. A signature failure is returned
/// as the detail-free [`WebhookError::InvalidSignature`] and the parser is
/// never reached; a parse failure is propagated with its reason.
pub fn verify_and_parse(
    body: &str,
    signature: &str,
    token: &str,
) -> Result<WebhookEnvelope, WebhookError> {
    if !verify_signature(body, signature, token) {
        return Err(WebhookError::InvalidSignature);
    }
    parse_payload(body).map_err(WebhookError::from)
}

/// Webhook verifier with the API key bound at construction.
///
/// Convenient when the host wires one verifier into its webhook route
/// instead of threading the token through every call.
pub struct WebhookVerifier {
    token: SecretString,
}

impl WebhookVerifier {
    /// Create a verifier for the application identified by `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Check a signature against a raw body. See [`verify_signature`].
    pub fn verify_signature(&self, body: &str, signature: &str) -> bool {
        verify_signature(body, signature, self.token.expose_secret())
    }

    /// Authenticate and parse a raw body. See [`verify_and_parse`].
    pub fn verify_and_parse(
        &self,
        body: &str,
        signature: &str,
    ) -> Result<WebhookEnvelope, WebhookError> {
        verify_and_parse(body, signature, self.token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::verifier::compute_test_signature;

    const TEST_TOKEN: &str = "f1e2d3c4b5a6f1e2d3c4b5a6";

    const VALID_BODY: &str = r#"{"type":"invoicePay","timestamp":"2024-01-01T00:00:00Z","data":{"id":1,"amount":5,"currency":"TONCOIN","status":"paid","payment":{"userId":42,"paymentNum":1,"paymentAmount":5,"paid":"2024-01-01T00:05:00Z"}}}"#;

    // ══════════════════════════════════════════════════════════════
    // Composed Flow Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn valid_signature_and_body_parse() {
        let signature = compute_test_signature(VALID_BODY, TEST_TOKEN);
        let envelope = verify_and_parse(VALID_BODY, &signature, TEST_TOKEN).unwrap();

        assert!(envelope.is_paid());
        assert_eq!(envelope.summary().invoice_id, 1);
    }

    #[test]
    fn wrong_signature_is_rejected_before_parsing() {
        // A body that would also fail parsing: the parser's error must not
        // be observable because verification runs first.
        let garbage = "{not json";
        let result = verify_and_parse(garbage, &"0".repeat(64), TEST_TOKEN);

        assert_eq!(result.unwrap_err(), WebhookError::InvalidSignature);
    }

    #[test]
    fn wrong_signature_on_valid_body_is_rejected() {
        let signature = compute_test_signature(VALID_BODY, "another-app-token");
        let result = verify_and_parse(VALID_BODY, &signature, TEST_TOKEN);

        assert_eq!(result.unwrap_err(), WebhookError::InvalidSignature);
    }

    #[test]
    fn authentic_but_malformed_body_is_a_parse_error() {
        let body = r#"{"type":"invoicePay","timestamp":"2024-01-01T00:00:00Z"}"#;
        let signature = compute_test_signature(body, TEST_TOKEN);

        let result = verify_and_parse(body, &signature, TEST_TOKEN);
        assert_eq!(
            result.unwrap_err(),
            WebhookError::Parse(ParseError::InvalidData)
        );
    }

    // ══════════════════════════════════════════════════════════════
    // WebhookVerifier Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn bound_verifier_matches_free_functions() {
        let verifier = WebhookVerifier::new(TEST_TOKEN);
        let signature = compute_test_signature(VALID_BODY, TEST_TOKEN);

        assert!(verifier.verify_signature(VALID_BODY, &signature));
        assert!(verifier.verify_and_parse(VALID_BODY, &signature).is_ok());
        assert_eq!(
            verifier.verify_and_parse(VALID_BODY, "bad").unwrap_err(),
            WebhookError::InvalidSignature
        );
    }
}
