//! Checkout and vault requests for the native PayPal flow.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::configuration::RedirectConfig;

/// Payment intent for one-time checkouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPalIntent {
    /// Authorize now, capture later.
    #[default]
    Authorize,
    /// Capture immediately.
    Sale,
    /// Create an order to authorize against later.
    Order,
}

impl PayPalIntent {
    /// Get the intent name as sent to the gateway.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorize => "authorize",
            Self::Sale => "sale",
            Self::Order => "order",
        }
    }
}

/// One-time payment request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPalNativeCheckoutRequest {
    /// Amount as a decimal string.
    pub amount: String,
    /// Payment intent.
    #[serde(default)]
    pub intent: PayPalIntent,
    /// ISO 4217 currency code; the merchant account default is used when absent.
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Offer Pay Later to the payer.
    #[serde(default)]
    pub offer_pay_later: bool,
}

impl PayPalNativeCheckoutRequest {
    /// Create a checkout request with the default intent.
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            intent: PayPalIntent::default(),
            currency_code: None,
            offer_pay_later: false,
        }
    }

    /// Set the payment intent.
    pub fn with_intent(mut self, intent: PayPalIntent) -> Self {
        self.intent = intent;
        self
    }

    /// Set the currency code.
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }
}

/// Billing agreement (vault) request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPalNativeVaultRequest {
    /// Description shown to the payer on the billing agreement.
    #[serde(default)]
    pub billing_agreement_description: Option<String>,
    /// Offer PayPal Credit to the payer.
    #[serde(default)]
    pub offer_credit: bool,
}

impl PayPalNativeVaultRequest {
    /// Create a vault request without a description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the billing agreement description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.billing_agreement_description = Some(description.into());
        self
    }
}

/// A request the native client can service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PayPalNativeRequest {
    /// One-time checkout.
    Checkout(PayPalNativeCheckoutRequest),
    /// Billing agreement.
    Vault(PayPalNativeVaultRequest),
}

impl PayPalNativeRequest {
    /// Hermes endpoint that creates the order for this request.
    pub fn hermes_path(&self) -> &'static str {
        match self {
            Self::Checkout(_) => "v1/paypal_hermes/create_payment_resource",
            Self::Vault(_) => "v1/paypal_hermes/setup_billing_agreement",
        }
    }

    /// Body for the order creation POST.
    pub fn parameters(&self, redirects: &RedirectConfig) -> Value {
        let mut params = Map::new();
        params.insert("return_url".into(), json!(redirects.return_url));
        params.insert("cancel_url".into(), json!(redirects.cancel_url));

        match self {
            Self::Checkout(req) => {
                params.insert("intent".into(), json!(req.intent.as_str()));
                params.insert("amount".into(), json!(req.amount));
                if let Some(currency) = &req.currency_code {
                    params.insert("currency_iso_code".into(), json!(currency));
                }
                params.insert("offer_pay_later".into(), json!(req.offer_pay_later));
            }
            Self::Vault(req) => {
                if let Some(description) = &req.billing_agreement_description {
                    params.insert("description".into(), json!(description));
                }
                params.insert("offer_paypal_credit".into(), json!(req.offer_credit));
            }
        }

        Value::Object(params)
    }
}

impl From<PayPalNativeCheckoutRequest> for PayPalNativeRequest {
    fn from(req: PayPalNativeCheckoutRequest) -> Self {
        Self::Checkout(req)
    }
}

impl From<PayPalNativeVaultRequest> for PayPalNativeRequest {
    fn from(req: PayPalNativeVaultRequest) -> Self {
        Self::Vault(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_parameters() {
        let request: PayPalNativeRequest = PayPalNativeCheckoutRequest::new("1")
            .with_intent(PayPalIntent::Sale)
            .into();
        let params = request.parameters(&RedirectConfig::default());

        assert_eq!(
            request.hermes_path(),
            "v1/paypal_hermes/create_payment_resource"
        );
        assert_eq!(params["intent"], "sale");
        assert_eq!(params["amount"], "1");
        assert_eq!(params["return_url"], "sdk.ios.braintree://onetouch/v1/success");
        assert_eq!(params["cancel_url"], "sdk.ios.braintree://onetouch/v1/cancel");
        assert!(params.get("currency_iso_code").is_none());
    }

    #[test]
    fn test_vault_parameters() {
        let request =
            PayPalNativeRequest::from(PayPalNativeVaultRequest::new().with_description("Monthly box"));
        let params = request.parameters(&RedirectConfig::default());

        assert_eq!(
            request.hermes_path(),
            "v1/paypal_hermes/setup_billing_agreement"
        );
        assert_eq!(params["description"], "Monthly box");
        assert_eq!(params["offer_paypal_credit"], false);
        assert!(params.get("amount").is_none());
    }

    #[test]
    fn test_intent_default() {
        assert_eq!(PayPalIntent::default().as_str(), "authorize");
    }
}
