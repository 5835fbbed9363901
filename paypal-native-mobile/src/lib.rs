//! PayPal Native Mobile FFI Bindings
//!
//! This crate provides UniFFI bindings for the PayPal native checkout
//! library, enabling integration with iOS (Swift) and Android (Kotlin)
//! applications.
//!
//! # Architecture
//!
//! The FFI layer wraps the core library:
//! - Tokenization response decoding into account nonces
//! - Configuration preflight
//! - Hermes order creation through a host-provided gateway callback
//!
//! # Thread Safety
//!
//! All exposed types are thread-safe and can be used from any thread.
//! Order creation blocks on an internal Tokio runtime.

pub mod transport_ffi;

pub use transport_ffi::{GatewayCallback, GatewayResult, OrderCreationClientFFI};

use std::sync::Arc;

use paypal_native_lib::{
    PayPalAccountNonce, PayPalCreditFinancing, PayPalCreditFinancingAmount, PayPalEnvironment,
    PayPalError, PayPalIntent, PayPalNativeCheckoutRequest, PayPalNativeOrder,
    PayPalNativeRequest, PayPalNativeSettings, PostalAddress, RedirectConfig,
};

// UniFFI scaffolding
uniffi::setup_scaffolding!();

// ============================================================================
// Error Types
// ============================================================================

/// Mobile-friendly error type.
///
/// Every variant carries the numeric `PayPalErrorCode` of the underlying
/// error, reported under [`error_domain`].
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PayPalMobileError {
    /// Tokenization response carried no nonce.
    #[error("Missing required token: {msg}")]
    MissingRequiredToken { msg: String, code: i32 },

    /// PayPal is not enabled or not configured for the merchant.
    #[error("PayPal disabled: {msg}")]
    Disabled {
        msg: String,
        code: i32,
        /// Hint shown to the merchant, e.g. where to enable PayPal.
        recovery_suggestion: Option<String>,
    },

    /// Validation error (invalid input, format).
    #[error("Validation error: {msg}")]
    Validation { msg: String, code: i32 },

    /// Serialization/deserialization error.
    #[error("Serialization error: {msg}")]
    Serialization { msg: String, code: i32 },

    /// Transport layer error reported by the gateway callback.
    #[error("Transport error: {msg}")]
    Transport { msg: String, code: i32 },

    /// The payer canceled the flow.
    #[error("Canceled: {msg}")]
    Canceled { msg: String, code: i32 },

    /// Internal error (unexpected state).
    #[error("Internal error: {msg}")]
    Internal { msg: String, code: i32 },
}

impl PayPalMobileError {
    /// Numeric error code.
    pub fn code(&self) -> i32 {
        match self {
            Self::MissingRequiredToken { code, .. }
            | Self::Disabled { code, .. }
            | Self::Validation { code, .. }
            | Self::Serialization { code, .. }
            | Self::Transport { code, .. }
            | Self::Canceled { code, .. }
            | Self::Internal { code, .. } => *code,
        }
    }
}

impl From<PayPalError> for PayPalMobileError {
    fn from(e: PayPalError) -> Self {
        let msg = e.to_string();
        let code = e.code() as i32;
        match e {
            PayPalError::MissingRequiredToken => Self::MissingRequiredToken { msg, code },
            PayPalError::Disabled {
                recovery_suggestion,
                ..
            } => Self::Disabled {
                msg,
                code,
                recovery_suggestion,
            },
            PayPalError::InvalidRequest(_)
            | PayPalError::Integration(_)
            | PayPalError::InvalidData { .. } => Self::Validation { msg, code },
            PayPalError::Serialization(_) => Self::Serialization { msg, code },
            PayPalError::Transport(_) => Self::Transport { msg, code },
            PayPalError::Canceled => Self::Canceled { msg, code },
            PayPalError::Unknown(_) => Self::Internal { msg, code },
        }
    }
}

impl From<serde_json::Error> for PayPalMobileError {
    fn from(e: serde_json::Error) -> Self {
        PayPalError::from(e).into()
    }
}

/// Result type for mobile operations.
pub type Result<T> = std::result::Result<T, PayPalMobileError>;

// ============================================================================
// Records
// ============================================================================

/// Postal address for FFI.
#[derive(Clone, Debug, Default, PartialEq, uniffi::Record)]
pub struct PostalAddressFFI {
    pub recipient_name: Option<String>,
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code_alpha2: Option<String>,
}

impl From<&PostalAddress> for PostalAddressFFI {
    fn from(address: &PostalAddress) -> Self {
        Self {
            recipient_name: address.recipient_name.clone(),
            street_address: address.street_address.clone(),
            extended_address: address.extended_address.clone(),
            locality: address.locality.clone(),
            region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            country_code_alpha2: address.country_code_alpha2.clone(),
        }
    }
}

/// Financing amount for FFI.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct CreditFinancingAmountFFI {
    pub currency: String,
    pub value: String,
}

impl From<&PayPalCreditFinancingAmount> for CreditFinancingAmountFFI {
    fn from(amount: &PayPalCreditFinancingAmount) -> Self {
        Self {
            currency: amount.currency.clone(),
            value: amount.value.clone(),
        }
    }
}

/// Credit financing offer for FFI.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct CreditFinancingFFI {
    pub card_amount_immutable: bool,
    pub monthly_payment: Option<CreditFinancingAmountFFI>,
    pub payer_acceptance: bool,
    pub term: i64,
    pub total_cost: Option<CreditFinancingAmountFFI>,
    pub total_interest: Option<CreditFinancingAmountFFI>,
}

impl From<&PayPalCreditFinancing> for CreditFinancingFFI {
    fn from(financing: &PayPalCreditFinancing) -> Self {
        Self {
            card_amount_immutable: financing.card_amount_immutable,
            monthly_payment: financing.monthly_payment.as_ref().map(Into::into),
            payer_acceptance: financing.payer_acceptance,
            term: financing.term,
            total_cost: financing.total_cost.as_ref().map(Into::into),
            total_interest: financing.total_interest.as_ref().map(Into::into),
        }
    }
}

/// PayPal environment for FFI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PayPalEnvironmentFFI {
    Live,
    Sandbox,
}

impl From<PayPalEnvironment> for PayPalEnvironmentFFI {
    fn from(environment: PayPalEnvironment) -> Self {
        match environment {
            PayPalEnvironment::Live => Self::Live,
            PayPalEnvironment::Sandbox => Self::Sandbox,
        }
    }
}

/// Checkout intent for FFI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PayPalIntentFFI {
    Authorize,
    Sale,
    Order,
}

impl From<PayPalIntentFFI> for PayPalIntent {
    fn from(intent: PayPalIntentFFI) -> Self {
        match intent {
            PayPalIntentFFI::Authorize => Self::Authorize,
            PayPalIntentFFI::Sale => Self::Sale,
            PayPalIntentFFI::Order => Self::Order,
        }
    }
}

/// Settings validated from the merchant configuration.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct PayPalNativeSettingsFFI {
    pub client_id: String,
    pub environment: PayPalEnvironmentFFI,
}

impl From<PayPalNativeSettings> for PayPalNativeSettingsFFI {
    fn from(settings: PayPalNativeSettings) -> Self {
        Self {
            client_id: settings.client_id,
            environment: settings.environment.into(),
        }
    }
}

/// A created order, ready to hand to the native checkout SDK.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct PayPalNativeOrderFFI {
    pub paypal_client_id: String,
    pub environment: PayPalEnvironmentFFI,
    pub order_id: String,
}

impl From<PayPalNativeOrder> for PayPalNativeOrderFFI {
    fn from(order: PayPalNativeOrder) -> Self {
        Self {
            paypal_client_id: order.paypal_client_id,
            environment: order.environment.into(),
            order_id: order.order_id,
        }
    }
}

// ============================================================================
// Account Nonce
// ============================================================================

/// Read-only view of a tokenized PayPal account.
///
/// Foreign code cannot construct this type; it is only returned by the
/// parse functions below.
#[derive(Debug, uniffi::Object)]
pub struct PayPalAccountNonceFFI {
    inner: PayPalAccountNonce,
}

#[uniffi::export]
impl PayPalAccountNonceFFI {
    /// The opaque, single-use token.
    pub fn nonce(&self) -> String {
        self.inner.nonce().to_string()
    }

    /// Payment method type label.
    pub fn type_label(&self) -> String {
        self.inner.type_label().to_string()
    }

    pub fn email(&self) -> Option<String> {
        self.inner.email().map(str::to_string)
    }

    pub fn first_name(&self) -> Option<String> {
        self.inner.first_name().map(str::to_string)
    }

    pub fn last_name(&self) -> Option<String> {
        self.inner.last_name().map(str::to_string)
    }

    pub fn phone(&self) -> Option<String> {
        self.inner.phone().map(str::to_string)
    }

    pub fn billing_address(&self) -> Option<PostalAddressFFI> {
        self.inner.billing_address().map(Into::into)
    }

    pub fn shipping_address(&self) -> Option<PostalAddressFFI> {
        self.inner.shipping_address().map(Into::into)
    }

    pub fn client_metadata_id(&self) -> Option<String> {
        self.inner.client_metadata_id().map(str::to_string)
    }

    pub fn payer_id(&self) -> Option<String> {
        self.inner.payer_id().map(str::to_string)
    }

    /// Whether this is the payer's default funding source.
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    pub fn credit_financing(&self) -> Option<CreditFinancingFFI> {
        self.inner.credit_financing().map(Into::into)
    }

    /// Serialize the nonce to JSON for storage or logging on the host side.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.inner)?)
    }
}

impl From<PayPalAccountNonce> for PayPalAccountNonceFFI {
    fn from(inner: PayPalAccountNonce) -> Self {
        Self { inner }
    }
}

// ============================================================================
// Exported Functions
// ============================================================================

/// Decode a single `paypalAccounts` entry into a nonce.
#[uniffi::export]
pub fn parse_paypal_account_nonce(json: String) -> Result<Arc<PayPalAccountNonceFFI>> {
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let nonce = paypal_native_lib::parse_account_nonce(&value)?;
    Ok(Arc::new(nonce.into()))
}

/// Decode a full tokenization response body into a nonce.
#[uniffi::export]
pub fn parse_tokenization_response(body: String) -> Result<Arc<PayPalAccountNonceFFI>> {
    let nonce = paypal_native_lib::parse_tokenization_response(&body)?;
    Ok(Arc::new(nonce.into()))
}

/// Validate a merchant configuration document.
#[uniffi::export]
pub fn parse_native_settings(config_json: String) -> Result<PayPalNativeSettingsFFI> {
    let config: serde_json::Value = serde_json::from_str(&config_json)?;
    Ok(PayPalNativeSettings::from_configuration(&config)?.into())
}

/// Build the hermes parameters for a checkout as a JSON string.
///
/// Useful for hosts that run the order creation POST themselves.
#[uniffi::export]
pub fn checkout_request_parameters(
    amount: String,
    intent: PayPalIntentFFI,
    currency_code: Option<String>,
    offer_pay_later: bool,
) -> Result<String> {
    let mut request = PayPalNativeCheckoutRequest::new(amount).with_intent(intent.into());
    request.currency_code = currency_code;
    request.offer_pay_later = offer_pay_later;

    let params = PayPalNativeRequest::from(request).parameters(&RedirectConfig::default());
    Ok(serde_json::to_string(&params)?)
}

/// Extract the order id from a hermes response body.
#[uniffi::export]
pub fn parse_order_id(response_json: String) -> Result<Option<String>> {
    let response: serde_json::Value = serde_json::from_str(&response_json)?;
    Ok(paypal_native_lib::order::parse_order_id(&response))
}

/// Error domain reported with PayPal native errors.
#[uniffi::export]
pub fn error_domain() -> String {
    PayPalError::DOMAIN.to_string()
}

/// Get the library version.
#[uniffi::export]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
