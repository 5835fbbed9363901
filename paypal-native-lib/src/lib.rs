//! PayPal native checkout library.
//!
//! Turns PayPal tokenization responses into immutable
//! [`PayPalAccountNonce`] values and prepares native checkout orders. The
//! crate performs no network I/O of its own; gateway access is injected
//! through the [`ApiClient`] trait.
//!
//! # Features
//!
//! - **Nonce decoding**: `response::parse_tokenization_response` is the only
//!   way to obtain a [`PayPalAccountNonce`]
//! - **Configuration preflight**: validate the merchant configuration before
//!   showing checkout
//! - **Order creation**: create checkout or billing agreement orders through
//!   the hermes endpoints
//!
//! # Example
//!
//! ```
//! use paypal_native_lib::{parse_tokenization_response, PayPalError};
//!
//! let nonce = parse_tokenization_response(r#"{"paypalAccounts":[{"nonce":"abc123"}]}"#)?;
//! assert_eq!(nonce.nonce(), "abc123");
//! assert!(!nonce.is_default());
//!
//! let missing = parse_tokenization_response(r#"{"paypalAccounts":[{"nonce":""}]}"#);
//! assert_eq!(missing, Err(PayPalError::MissingRequiredToken));
//! # Ok::<(), PayPalError>(())
//! ```

pub mod address;
pub mod configuration;
pub mod credit_financing;
pub mod errors;
pub mod nonce;
pub mod order;
pub mod prelude;
pub mod request;
pub mod response;
mod transport;

/// Test utilities for gateway interaction tests.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::PostalAddress;
pub use configuration::{PayPalEnvironment, PayPalNativeSettings, RedirectConfig};
pub use credit_financing::{PayPalCreditFinancing, PayPalCreditFinancingAmount};
pub use errors::{PayPalError, PayPalErrorCode};
pub use nonce::PayPalAccountNonce;
pub use order::{OrderCreationClient, PayPalNativeOrder};
pub use request::{
    PayPalIntent, PayPalNativeCheckoutRequest, PayPalNativeRequest, PayPalNativeVaultRequest,
};
pub use response::{parse_account_nonce, parse_tokenization_response};
pub use transport::ApiClient;

/// Common result alias for PayPal native operations.
pub type Result<T> = std::result::Result<T, PayPalError>;
