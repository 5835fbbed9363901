//! Decoder for PayPal account tokenization responses.
//!
//! This is the only code path that can produce a [`PayPalAccountNonce`]. It
//! pulls the raw fields out of the gateway JSON and leaves all defaulting to
//! the nonce builder.
//!
//! # Example
//!
//! ```
//! use paypal_native_lib::response::parse_tokenization_response;
//!
//! let body = r#"{
//!     "paypalAccounts": [{
//!         "nonce": "fake-paypal-nonce",
//!         "default": true,
//!         "details": {
//!             "email": "payer@example.com",
//!             "payerInfo": { "firstName": "Jane", "payerId": "FAKE-PAYER-ID" }
//!         }
//!     }]
//! }"#;
//!
//! let nonce = parse_tokenization_response(body).unwrap();
//! assert_eq!(nonce.nonce(), "fake-paypal-nonce");
//! assert_eq!(nonce.email(), Some("payer@example.com"));
//! assert!(nonce.is_default());
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::address::PostalAddress;
use crate::credit_financing::PayPalCreditFinancing;
use crate::errors::PayPalError;
use crate::nonce::{NonceBuilder, PayPalAccountNonce};
use crate::Result;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenizationResponse {
    #[serde(default)]
    paypal_accounts: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    #[serde(default)]
    nonce: Option<String>,
    #[serde(default, rename = "default")]
    is_default: Option<bool>,
    #[serde(default)]
    details: Option<RawDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetails {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    correlation_id: Option<String>,
    #[serde(default)]
    payer_info: Option<RawPayerInfo>,
    #[serde(default)]
    credit_financing_offered: Option<PayPalCreditFinancing>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayerInfo {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    payer_id: Option<String>,
    #[serde(default)]
    billing_address: Option<PostalAddress>,
    #[serde(default)]
    shipping_address: Option<PostalAddress>,
    #[serde(default)]
    account_address: Option<PostalAddress>,
}

/// Decode a single PayPal account object into a nonce.
///
/// # Semantics
/// - The payer email inside `payerInfo` wins over `details.email` when both
///   are present.
/// - `details.correlationId` becomes the client metadata id.
/// - The shipping address falls back to `payerInfo.accountAddress`.
/// - A missing or empty `nonce` yields [`PayPalError::MissingRequiredToken`];
///   wrongly typed fields yield [`PayPalError::Serialization`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(json)))]
pub fn parse_account_nonce(json: &Value) -> Result<PayPalAccountNonce> {
    let account = RawAccount::deserialize(json)?;
    let details = account.details.unwrap_or_default();
    let payer = details.payer_info.unwrap_or_default();

    let email = payer
        .email
        .filter(|email| !email.is_empty())
        .or(details.email);
    let shipping_address = payer.shipping_address.or(payer.account_address);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        has_billing = payer.billing_address.is_some(),
        has_shipping = shipping_address.is_some(),
        has_financing = details.credit_financing_offered.is_some(),
        "decoded PayPal account fields"
    );

    NonceBuilder::new(account.nonce)
        .email(email)
        .first_name(payer.first_name)
        .last_name(payer.last_name)
        .phone(payer.phone)
        .billing_address(payer.billing_address)
        .shipping_address(shipping_address)
        .client_metadata_id(details.correlation_id)
        .payer_id(payer.payer_id)
        .is_default(account.is_default)
        .credit_financing(details.credit_financing_offered)
        .build()
}

/// Decode a full tokenization response body.
///
/// The gateway wraps accounts in a `paypalAccounts` array; the first entry is
/// the freshly tokenized account.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(body), fields(body_len = body.len())))]
pub fn parse_tokenization_response(body: &str) -> Result<PayPalAccountNonce> {
    let response: TokenizationResponse = serde_json::from_str(body)?;
    let account = response
        .paypal_accounts
        .and_then(|accounts| accounts.into_iter().next())
        .ok_or_else(|| PayPalError::invalid_data("paypalAccounts", "no account in response"))?;

    let result = parse_account_nonce(&account);

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::warn!(code = ?err.code(), "PayPal tokenization response rejected");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PayPalErrorCode;
    use serde_json::json;

    #[test]
    fn test_full_account() {
        let nonce = parse_account_nonce(&json!({
            "nonce": "tok-1",
            "default": true,
            "details": {
                "email": "details@example.com",
                "correlationId": "corr-1",
                "payerInfo": {
                    "email": "payer@example.com",
                    "firstName": "Jane",
                    "lastName": "Doe",
                    "phone": "555-0100",
                    "payerId": "PAYER-1",
                    "billingAddress": { "line1": "1 Billing Rd", "city": "Austin" },
                    "shippingAddress": { "recipientName": "Jane", "line1": "2 Ship Ln" }
                },
                "creditFinancingOffered": { "term": 12, "payerAcceptance": true }
            }
        }))
        .unwrap();

        assert_eq!(nonce.nonce(), "tok-1");
        assert_eq!(nonce.email(), Some("payer@example.com"));
        assert_eq!(nonce.first_name(), Some("Jane"));
        assert_eq!(nonce.last_name(), Some("Doe"));
        assert_eq!(nonce.phone(), Some("555-0100"));
        assert_eq!(nonce.payer_id(), Some("PAYER-1"));
        assert_eq!(nonce.client_metadata_id(), Some("corr-1"));
        assert!(nonce.is_default());
        assert_eq!(
            nonce.billing_address().unwrap().street_address.as_deref(),
            Some("1 Billing Rd")
        );
        assert_eq!(
            nonce.shipping_address().unwrap().street_address.as_deref(),
            Some("2 Ship Ln")
        );
        assert_eq!(nonce.credit_financing().unwrap().term, 12);
    }

    #[test]
    fn test_details_email_used_when_payer_email_missing() {
        let nonce = parse_account_nonce(&json!({
            "nonce": "tok",
            "details": { "email": "details@example.com", "payerInfo": { "email": "" } }
        }))
        .unwrap();
        assert_eq!(nonce.email(), Some("details@example.com"));
    }

    #[test]
    fn test_account_address_fallback() {
        let nonce = parse_account_nonce(&json!({
            "nonce": "tok",
            "details": { "payerInfo": { "accountAddress": { "street1": "3 Account Ave" } } }
        }))
        .unwrap();
        assert_eq!(
            nonce.shipping_address().unwrap().street_address.as_deref(),
            Some("3 Account Ave")
        );
        assert_eq!(nonce.billing_address(), None);
    }

    #[test]
    fn test_null_default_and_details() {
        let nonce =
            parse_account_nonce(&json!({ "nonce": "tok", "default": null, "details": null }))
                .unwrap();
        assert!(!nonce.is_default());
        assert_eq!(nonce.email(), None);
    }

    #[test]
    fn test_missing_nonce() {
        let err = parse_account_nonce(&json!({ "details": { "email": "a@b.c" } })).unwrap_err();
        assert_eq!(err, PayPalError::MissingRequiredToken);
    }

    #[test]
    fn test_non_boolean_default_rejected() {
        let err = parse_account_nonce(&json!({ "nonce": "tok", "default": "yes" })).unwrap_err();
        assert_eq!(err.code(), PayPalErrorCode::Serialization);
    }

    #[test]
    fn test_response_without_accounts() {
        let err = parse_tokenization_response(r#"{ "paypalAccounts": [] }"#).unwrap_err();
        assert_eq!(err.code(), PayPalErrorCode::InvalidData);

        let err = parse_tokenization_response("{}").unwrap_err();
        assert_eq!(err.code(), PayPalErrorCode::InvalidData);
    }

    #[test]
    fn test_malformed_body() {
        let err = parse_tokenization_response("not json").unwrap_err();
        assert_eq!(err.code(), PayPalErrorCode::Serialization);
    }
}
