//! End-to-end decoding of tokenization responses into nonces.

use paypal_native_lib::test_utils::TestFixtures;
use paypal_native_lib::{
    parse_account_nonce, parse_tokenization_response, PayPalCreditFinancing,
    PayPalCreditFinancingAmount, PayPalError, PayPalErrorCode,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

#[test]
fn test_full_response() {
    let nonce =
        parse_tokenization_response(&TestFixtures::full_tokenization_response("fake-nonce"))
            .unwrap();

    assert_eq!(nonce.nonce(), "fake-nonce");
    assert_eq!(nonce.type_label(), "PayPal");
    assert_eq!(nonce.email(), Some("payer@example.com"));
    assert_eq!(nonce.first_name(), Some("Jane"));
    assert_eq!(nonce.last_name(), Some("Doe"));
    assert_eq!(nonce.phone(), Some("555-555-0100"));
    assert_eq!(nonce.payer_id(), Some("FAKE-PAYER-ID"));
    assert_eq!(nonce.client_metadata_id(), Some("client-metadata-id"));
    assert!(nonce.is_default());

    let billing = nonce.billing_address().unwrap();
    assert_eq!(billing.street_address.as_deref(), Some("1 Billing Rd"));
    assert_eq!(billing.extended_address.as_deref(), Some("Suite 2"));
    assert_eq!(billing.country_code_alpha2.as_deref(), Some("US"));

    let shipping = nonce.shipping_address().unwrap();
    assert_eq!(shipping.locality.as_deref(), Some("Oakland"));

    let financing = nonce.credit_financing().unwrap();
    assert_eq!(financing.term, 18);
    assert_eq!(
        financing.monthly_payment,
        Some(PayPalCreditFinancingAmount::new("13.88", "USD"))
    );
}

#[test]
fn test_only_nonce() {
    let nonce =
        parse_tokenization_response(&TestFixtures::minimal_tokenization_response("abc123"))
            .unwrap();

    assert_eq!(nonce.nonce(), "abc123");
    assert!(!nonce.is_default());
    assert!(nonce.email().is_none());
    assert!(nonce.first_name().is_none());
    assert!(nonce.last_name().is_none());
    assert!(nonce.phone().is_none());
    assert!(nonce.billing_address().is_none());
    assert!(nonce.shipping_address().is_none());
    assert!(nonce.client_metadata_id().is_none());
    assert!(nonce.payer_id().is_none());
    assert!(nonce.credit_financing().is_none());
}

#[test]
fn test_empty_nonce_with_populated_fields() {
    let mut body: Value =
        serde_json::from_str(&TestFixtures::full_tokenization_response("x")).unwrap();
    body["paypalAccounts"][0]["nonce"] = json!("");

    let err = parse_tokenization_response(&body.to_string()).unwrap_err();
    assert_eq!(err, PayPalError::MissingRequiredToken);
    assert_eq!(err.code(), PayPalErrorCode::MissingRequiredToken);
    assert!(!err.is_retryable());
}

#[test]
fn test_default_with_financing() {
    let financing = json!({
        "cardAmountImmutable": true,
        "monthlyPayment": { "currency": "EUR", "value": "20.00" },
        "payerAcceptance": false,
        "term": 6,
        "totalCost": { "currency": "EUR", "value": "120.00" },
        "totalInterest": { "currency": "EUR", "value": "0.00" }
    });
    let nonce = parse_account_nonce(&json!({
        "nonce": "tok-9",
        "default": true,
        "details": { "creditFinancingOffered": financing.clone() }
    }))
    .unwrap();

    assert!(nonce.is_default());
    let expected: PayPalCreditFinancing = serde_json::from_value(financing).unwrap();
    assert_eq!(nonce.credit_financing(), Some(&expected));
}

#[test]
fn test_explicit_false_matches_omitted() {
    let explicit = parse_account_nonce(&json!({ "nonce": "tok", "default": false })).unwrap();
    let omitted = parse_account_nonce(&json!({ "nonce": "tok" })).unwrap();
    assert_eq!(explicit, omitted);
}

#[test]
fn test_nonce_shared_across_threads() {
    let nonce = std::sync::Arc::new(
        parse_tokenization_response(&TestFixtures::full_tokenization_response("shared")).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let nonce = nonce.clone();
            std::thread::spawn(move || nonce.nonce().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "shared");
    }
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9@. -]{1,20}")
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), json!(value));
    }
}

proptest! {
    /// Any subset of payer fields survives decoding unchanged.
    #[test]
    fn payer_fields_are_independent(
        first_name in optional_text(),
        last_name in optional_text(),
        phone in optional_text(),
        payer_id in optional_text(),
        email in optional_text(),
        correlation_id in optional_text(),
        default_flag in proptest::option::of(any::<bool>()),
        with_billing in any::<bool>(),
        with_shipping in any::<bool>(),
    ) {
        let mut payer = Map::new();
        insert_opt(&mut payer, "firstName", &first_name);
        insert_opt(&mut payer, "lastName", &last_name);
        insert_opt(&mut payer, "phone", &phone);
        insert_opt(&mut payer, "payerId", &payer_id);
        insert_opt(&mut payer, "email", &email);
        if with_billing {
            payer.insert("billingAddress".into(), json!({ "line1": "1 Billing Rd" }));
        }
        if with_shipping {
            payer.insert("shippingAddress".into(), json!({ "line1": "2 Shipping Ln" }));
        }

        let mut details = Map::new();
        details.insert("payerInfo".into(), Value::Object(payer));
        insert_opt(&mut details, "correlationId", &correlation_id);

        let mut account = json!({ "nonce": "tok", "details": details });
        if let Some(flag) = default_flag {
            account["default"] = json!(flag);
        }

        let nonce = parse_account_nonce(&account).unwrap();
        prop_assert_eq!(nonce.first_name(), first_name.as_deref());
        prop_assert_eq!(nonce.last_name(), last_name.as_deref());
        prop_assert_eq!(nonce.phone(), phone.as_deref());
        prop_assert_eq!(nonce.payer_id(), payer_id.as_deref());
        prop_assert_eq!(nonce.email(), email.as_deref());
        prop_assert_eq!(nonce.client_metadata_id(), correlation_id.as_deref());
        prop_assert_eq!(nonce.is_default(), default_flag == Some(true));
        prop_assert_eq!(nonce.billing_address().is_some(), with_billing);
        prop_assert_eq!(nonce.shipping_address().is_some(), with_shipping);
        prop_assert!(nonce.credit_financing().is_none());
    }
}
