//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use paypal_native_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Nonce types: `PayPalAccountNonce`, `PostalAddress`, `PayPalCreditFinancing`
//! - Error types: `PayPalError`, `PayPalErrorCode`, `Result`
//! - Decoding: `parse_tokenization_response`, `parse_account_nonce`
//! - Checkout: `OrderCreationClient`, `PayPalNativeRequest`, `ApiClient`

// Nonce types
pub use crate::{
    PayPalAccountNonce, PayPalCreditFinancing, PayPalCreditFinancingAmount, PostalAddress,
};

// Error handling
pub use crate::errors::{PayPalError, PayPalErrorCode};
pub use crate::Result;

// Decoding
pub use crate::response::{parse_account_nonce, parse_tokenization_response};

// Checkout
pub use crate::{
    ApiClient, OrderCreationClient, PayPalEnvironment, PayPalIntent, PayPalNativeCheckoutRequest,
    PayPalNativeOrder, PayPalNativeRequest, PayPalNativeVaultRequest, RedirectConfig,
};
