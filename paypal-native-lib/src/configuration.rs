//! Merchant configuration checks and redirect settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PayPalError;
use crate::Result;

const DISABLED_MESSAGE: &str = "PayPal is not enabled for this merchant";
const DISABLED_RECOVERY: &str = "Enable PayPal for this merchant in the Braintree Control Panel";
const MISSING_CLIENT_ID_MESSAGE: &str =
    "Failed to fetch PayPalClientID from Braintree configuration.";
const INVALID_ENVIRONMENT_MESSAGE: &str = "PayPal Native Checkout failed because an invalid environment identifier was retrieved from the configuration.";

/// PayPal environment the native checkout runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPalEnvironment {
    /// Production.
    Live,
    /// Sandbox.
    Sandbox,
}

impl PayPalEnvironment {
    /// Map a gateway environment name onto a PayPal environment.
    ///
    /// Only `"production"` and `"sandbox"` are recognised.
    pub fn from_gateway(name: &str) -> Option<Self> {
        match name {
            "production" => Some(Self::Live),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }

    /// Get the environment name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sandbox => "sandbox",
        }
    }
}

/// Settings extracted from the merchant's remote configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayPalNativeSettings {
    /// PayPal client id for the native checkout SDK.
    pub client_id: String,
    /// Environment to run the checkout in.
    pub environment: PayPalEnvironment,
}

impl PayPalNativeSettings {
    /// Validate a remote configuration document.
    ///
    /// # Errors
    /// - [`PayPalError::Disabled`] when `paypalEnabled` is not `true` or the
    ///   PayPal client id is missing.
    /// - [`PayPalError::Unknown`] when the environment is missing or is not
    ///   `production`/`sandbox`.
    pub fn from_configuration(config: &Value) -> Result<Self> {
        if !is_paypal_enabled(config) {
            return Err(PayPalError::disabled(
                DISABLED_MESSAGE,
                Some(DISABLED_RECOVERY),
            ));
        }

        let client_id = config["paypal"]["clientId"]
            .as_str()
            .ok_or_else(|| PayPalError::disabled(MISSING_CLIENT_ID_MESSAGE, None))?
            .to_string();

        let environment = config["environment"]
            .as_str()
            .and_then(PayPalEnvironment::from_gateway)
            .ok_or_else(|| PayPalError::Unknown(INVALID_ENVIRONMENT_MESSAGE.to_string()))?;

        Ok(Self {
            client_id,
            environment,
        })
    }
}

/// Whether the configuration explicitly enables PayPal.
pub fn is_paypal_enabled(config: &Value) -> bool {
    config["paypalEnabled"].as_bool() == Some(true)
}

/// Redirect URLs sent to the order creation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// URL PayPal redirects to after approval.
    #[serde(default = "default_return_url")]
    pub return_url: String,

    /// URL PayPal redirects to when the payer cancels.
    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,
}

fn default_return_url() -> String {
    "sdk.ios.braintree://onetouch/v1/success".to_string()
}

fn default_cancel_url() -> String {
    "sdk.ios.braintree://onetouch/v1/cancel".to_string()
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            return_url: default_return_url(),
            cancel_url: default_cancel_url(),
        }
    }
}

impl RedirectConfig {
    /// Set the return URL.
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = url.into();
        self
    }

    /// Set the cancel URL.
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = url.into();
        self
    }
}
