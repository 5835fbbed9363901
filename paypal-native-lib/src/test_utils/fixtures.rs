//! Test fixtures and data generators.

use serde_json::{json, Value};

/// Collection of commonly used gateway documents.
pub struct TestFixtures;

impl TestFixtures {
    /// PayPal client id used by the canned configurations.
    pub const CLIENT_ID: &'static str = "some-client-id";

    /// A sandbox merchant configuration with PayPal enabled.
    pub fn sandbox_configuration() -> Value {
        Self::configuration("sandbox")
    }

    /// A production merchant configuration with PayPal enabled.
    pub fn production_configuration() -> Value {
        Self::configuration("production")
    }

    /// A merchant configuration for an arbitrary environment name.
    pub fn configuration(environment: &str) -> Value {
        json!({
            "environment": environment,
            "paypalEnabled": true,
            "paypal": { "clientId": Self::CLIENT_ID }
        })
    }

    /// Hermes response for a one-time checkout.
    pub fn checkout_hermes_response(token: &str) -> Value {
        json!({
            "paymentResource": { "redirectUrl": format!("my-url.com?token={token}") }
        })
    }

    /// Hermes response for a billing agreement.
    pub fn vault_hermes_response(ba_token: &str) -> Value {
        json!({
            "agreementSetup": {
                "approvalUrl": format!("https://checkout.paypal.test/agreements/approve?ba_token={ba_token}")
            }
        })
    }

    /// A tokenization response body with every optional field populated.
    pub fn full_tokenization_response(nonce: &str) -> String {
        json!({
            "paypalAccounts": [{
                "nonce": nonce,
                "default": true,
                "type": "PayPalAccount",
                "details": {
                    "email": "fallback@example.com",
                    "correlationId": "client-metadata-id",
                    "payerInfo": {
                        "email": "payer@example.com",
                        "firstName": "Jane",
                        "lastName": "Doe",
                        "phone": "555-555-0100",
                        "payerId": "FAKE-PAYER-ID",
                        "billingAddress": {
                            "recipientName": "Jane Doe",
                            "line1": "1 Billing Rd",
                            "line2": "Suite 2",
                            "city": "Chicago",
                            "state": "IL",
                            "postalCode": "60654",
                            "countryCode": "US"
                        },
                        "shippingAddress": {
                            "recipientName": "Jane Doe",
                            "line1": "2 Shipping Ln",
                            "city": "Oakland",
                            "state": "CA",
                            "postalCode": "94612",
                            "countryCode": "US"
                        }
                    },
                    "creditFinancingOffered": {
                        "cardAmountImmutable": false,
                        "monthlyPayment": { "currency": "USD", "value": "13.88" },
                        "payerAcceptance": true,
                        "term": 18,
                        "totalCost": { "currency": "USD", "value": "250.00" },
                        "totalInterest": { "currency": "USD", "value": "0.00" }
                    }
                }
            }]
        })
        .to_string()
    }

    /// A tokenization response body carrying only the nonce.
    pub fn minimal_tokenization_response(nonce: &str) -> String {
        json!({ "paypalAccounts": [{ "nonce": nonce }] }).to_string()
    }
}
