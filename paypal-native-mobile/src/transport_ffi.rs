//! Gateway FFI Wrappers
//!
//! Mobile apps already own an HTTP stack configured with their client token
//! or tokenization key. This module lets them plug that stack into order
//! creation through a callback interface.
//!
//! ```swift
//! // Swift example
//! class BraintreeGateway: GatewayCallback {
//!     func fetchConfiguration() -> GatewayResult {
//!         // return the cached configuration JSON
//!     }
//!
//!     func post(path: String, parametersJson: String) -> GatewayResult {
//!         // POST and return the response body
//!     }
//!
//!     func sendAnalyticsEvent(name: String) { }
//! }
//!
//! let client = try OrderCreationClientFfi.fromCallback(callback: BraintreeGateway())
//! let order = try client.createCheckoutOrder(amount: "10.00", intent: .authorize, currencyCode: nil)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use paypal_native_lib::{
    ApiClient, OrderCreationClient, PayPalError, PayPalErrorCode, PayPalNativeCheckoutRequest,
    PayPalNativeRequest, PayPalNativeVaultRequest, RedirectConfig,
};
use serde_json::Value;

use crate::{PayPalIntentFFI, PayPalMobileError, PayPalNativeOrderFFI, Result};

// ============================================================================
// Gateway Callback Interface
// ============================================================================

/// Result type for gateway calls.
#[derive(Clone, Debug, uniffi::Record)]
pub struct GatewayResult {
    /// Whether the call succeeded
    pub success: bool,
    /// JSON body, if any
    pub body: Option<String>,
    /// Error message if failed
    pub error: Option<String>,
}

impl GatewayResult {
    /// Create a success result with a body.
    pub fn ok(body: Option<String>) -> Self {
        Self {
            success: true,
            body,
            error: None,
        }
    }

    /// Create an error result.
    pub fn err(message: String) -> Self {
        Self {
            success: false,
            body: None,
            error: Some(message),
        }
    }

    fn into_json(self) -> paypal_native_lib::Result<Option<Value>> {
        if !self.success {
            return Err(PayPalError::Transport(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        match self.body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }
}

/// Callback interface for gateway access.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync).
#[uniffi::export(callback_interface)]
pub trait GatewayCallback: Send + Sync {
    /// Return the merchant's remote configuration JSON.
    ///
    /// A successful result without a body means no configuration is available.
    fn fetch_configuration(&self) -> GatewayResult;

    /// POST JSON parameters to a gateway path.
    ///
    /// # Arguments
    ///
    /// * `path` - Gateway path (e.g., "v1/paypal_hermes/create_payment_resource")
    /// * `parameters_json` - Request body
    fn post(&self, path: String, parameters_json: String) -> GatewayResult;

    /// Record an analytics event.
    fn send_analytics_event(&self, name: String);
}

/// Adapts a [`GatewayCallback`] to the library's [`ApiClient`] trait.
struct CallbackApiClient {
    callback: Box<dyn GatewayCallback>,
}

#[async_trait]
impl ApiClient for CallbackApiClient {
    async fn fetch_configuration(&self) -> paypal_native_lib::Result<Option<Value>> {
        self.callback.fetch_configuration().into_json()
    }

    async fn post(&self, path: &str, parameters: Value) -> paypal_native_lib::Result<Value> {
        let result = self
            .callback
            .post(path.to_string(), parameters.to_string())
            .into_json()?;
        Ok(result.unwrap_or(Value::Null))
    }

    async fn send_analytics_event(&self, name: &str) {
        self.callback.send_analytics_event(name.to_string());
    }
}

// ============================================================================
// Order Creation FFI
// ============================================================================

/// FFI wrapper around the order creation client.
#[derive(uniffi::Object)]
pub struct OrderCreationClientFFI {
    client: OrderCreationClient<CallbackApiClient>,
    /// Tokio runtime for async operations.
    runtime: tokio::runtime::Runtime,
}

#[uniffi::export]
impl OrderCreationClientFFI {
    /// Create a client that reaches the gateway through `callback`.
    #[uniffi::constructor]
    pub fn from_callback(callback: Box<dyn GatewayCallback>) -> Result<Arc<Self>> {
        Self::from_callback_with_redirects(callback, None, None)
    }

    /// Create a client with custom return and cancel URLs.
    #[uniffi::constructor]
    pub fn from_callback_with_redirects(
        callback: Box<dyn GatewayCallback>,
        return_url: Option<String>,
        cancel_url: Option<String>,
    ) -> Result<Arc<Self>> {
        let runtime = tokio::runtime::Runtime::new().map_err(|e| PayPalMobileError::Internal {
            msg: e.to_string(),
            code: PayPalErrorCode::Unknown as i32,
        })?;

        let mut redirects = RedirectConfig::default();
        if let Some(url) = return_url {
            redirects = redirects.with_return_url(url);
        }
        if let Some(url) = cancel_url {
            redirects = redirects.with_cancel_url(url);
        }

        Ok(Arc::new(Self {
            client: OrderCreationClient::with_redirects(CallbackApiClient { callback }, redirects),
            runtime,
        }))
    }

    /// Create a one-time checkout order.
    pub fn create_checkout_order(
        &self,
        amount: String,
        intent: PayPalIntentFFI,
        currency_code: Option<String>,
    ) -> Result<PayPalNativeOrderFFI> {
        let mut request = PayPalNativeCheckoutRequest::new(amount).with_intent(intent.into());
        request.currency_code = currency_code;
        self.create_order(request.into())
    }

    /// Create a billing agreement order.
    pub fn create_vault_order(
        &self,
        billing_agreement_description: Option<String>,
        offer_credit: bool,
    ) -> Result<PayPalNativeOrderFFI> {
        let mut request = PayPalNativeVaultRequest::new();
        request.billing_agreement_description = billing_agreement_description;
        request.offer_credit = offer_credit;
        self.create_order(request.into())
    }
}

impl OrderCreationClientFFI {
    fn create_order(&self, request: PayPalNativeRequest) -> Result<PayPalNativeOrderFFI> {
        let result = self.runtime.block_on(self.client.create_order(&request));

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(code = ?err.code(), "PayPal order creation failed");
        }

        Ok(result?.into())
    }
}
