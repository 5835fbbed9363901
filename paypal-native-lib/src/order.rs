//! Order creation for the native checkout flow.
//!
//! Before the native checkout UI can be shown, the merchant configuration is
//! checked and an order is created through the hermes endpoints. The
//! resulting [`PayPalNativeOrder`] carries everything the checkout SDK needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::configuration::{
    is_paypal_enabled, PayPalEnvironment, PayPalNativeSettings, RedirectConfig,
};
use crate::errors::PayPalError;
use crate::request::PayPalNativeRequest;
use crate::transport::ApiClient;
use crate::Result;

/// Analytics event sent when the merchant has PayPal disabled.
pub const PREFLIGHT_DISABLED_EVENT: &str = "ios.paypal-otc.preflight.disabled";

const MISSING_CONFIGURATION_MESSAGE: &str = "Failed to fetch Braintree configuration.";
const ORDER_FAILED_MESSAGE: &str = "Failed to create PayPal order.";

/// An order ready to be handed to the native checkout SDK.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPalNativeOrder {
    /// PayPal client id from the merchant configuration.
    pub paypal_client_id: String,
    /// Environment the order was created in.
    pub environment: PayPalEnvironment,
    /// Order (or billing agreement) token.
    pub order_id: String,
}

/// Creates PayPal orders through an injected [`ApiClient`].
pub struct OrderCreationClient<C> {
    api_client: C,
    redirects: RedirectConfig,
}

impl<C: ApiClient> OrderCreationClient<C> {
    /// Create a client with the default redirect URLs.
    pub fn new(api_client: C) -> Self {
        Self::with_redirects(api_client, RedirectConfig::default())
    }

    /// Create a client with custom redirect URLs.
    pub fn with_redirects(api_client: C, redirects: RedirectConfig) -> Self {
        Self {
            api_client,
            redirects,
        }
    }

    /// Access the underlying API client.
    pub fn api_client(&self) -> &C {
        &self.api_client
    }

    /// Check the merchant configuration and create an order for `request`.
    ///
    /// # Semantics
    /// - Transport failures while fetching configuration or posting the
    ///   order are returned unchanged.
    /// - A disabled merchant also records [`PREFLIGHT_DISABLED_EVENT`].
    /// - A hermes response without an approval token fails with
    ///   [`PayPalError::Unknown`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, request), fields(path = request.hermes_path()))
    )]
    pub async fn create_order(&self, request: &PayPalNativeRequest) -> Result<PayPalNativeOrder> {
        let config = self
            .api_client
            .fetch_configuration()
            .await?
            .ok_or_else(|| PayPalError::Unknown(MISSING_CONFIGURATION_MESSAGE.to_string()))?;

        if !is_paypal_enabled(&config) {
            self.api_client
                .send_analytics_event(PREFLIGHT_DISABLED_EVENT)
                .await;
        }
        let settings = PayPalNativeSettings::from_configuration(&config)?;

        let response = self
            .api_client
            .post(request.hermes_path(), request.parameters(&self.redirects))
            .await?;

        let order_id = parse_order_id(&response)
            .ok_or_else(|| PayPalError::Unknown(ORDER_FAILED_MESSAGE.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(environment = settings.environment.as_str(), "created PayPal order");

        Ok(PayPalNativeOrder {
            paypal_client_id: settings.client_id,
            environment: settings.environment,
            order_id,
        })
    }
}

/// Extract the order token from a hermes response.
///
/// Checkouts answer with `paymentResource.redirectUrl`, billing agreements
/// with `agreementSetup.approvalUrl`. The token is the `token` (or
/// `ba_token`) query parameter of that URL.
pub fn parse_order_id(response: &Value) -> Option<String> {
    let approval_url = response["paymentResource"]["redirectUrl"]
        .as_str()
        .or_else(|| response["agreementSetup"]["approvalUrl"].as_str())?;
    token_from_approval_url(approval_url)
}

fn token_from_approval_url(approval_url: &str) -> Option<String> {
    let (_, query) = approval_url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    let mut ba_token = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "token" if !value.is_empty() => return Some(value.into_owned()),
            "ba_token" if !value.is_empty() => ba_token = Some(value.into_owned()),
            _ => {}
        }
    }
    ba_token
}
