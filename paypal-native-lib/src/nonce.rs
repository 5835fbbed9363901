//! The tokenized PayPal account value and the builder that assembles it.
//!
//! [`PayPalAccountNonce`] has no public constructor. The only way to obtain
//! one is through the response decoder in [`crate::response`], which feeds
//! raw gateway fields into the crate-internal [`NonceBuilder`].

use serde::Serialize;

use crate::address::PostalAddress;
use crate::credit_financing::PayPalCreditFinancing;
use crate::errors::PayPalError;
use crate::Result;

/// A tokenized PayPal account, ready to be submitted in a transaction.
///
/// The value is immutable: every field is private and exposed through a
/// read-only accessor. Optional payer details stay `None` when the gateway did
/// not share them; they are never filled with placeholder values.
///
/// # Example
///
/// ```
/// use paypal_native_lib::response::parse_account_nonce;
///
/// let nonce = parse_account_nonce(&serde_json::json!({ "nonce": "abc123" })).unwrap();
/// assert_eq!(nonce.nonce(), "abc123");
/// assert!(!nonce.is_default());
/// assert!(nonce.email().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalAccountNonce {
    nonce: String,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    billing_address: Option<PostalAddress>,
    shipping_address: Option<PostalAddress>,
    client_metadata_id: Option<String>,
    payer_id: Option<String>,
    is_default: bool,
    credit_financing: Option<PayPalCreditFinancing>,
}

impl PayPalAccountNonce {
    /// Payment method type reported for PayPal account nonces.
    pub const TYPE: &'static str = "PayPal";

    /// The opaque, single-use token.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Payer's email address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Payer's first name.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Payer's last name.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Payer's phone number, unvalidated.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Billing address of the funding source.
    pub fn billing_address(&self) -> Option<&PostalAddress> {
        self.billing_address.as_ref()
    }

    /// Shipping address collected during authorization.
    pub fn shipping_address(&self) -> Option<&PostalAddress> {
        self.shipping_address.as_ref()
    }

    /// Correlation id the application supplied when the flow started.
    pub fn client_metadata_id(&self) -> Option<&str> {
        self.client_metadata_id.as_deref()
    }

    /// Payer's identifier at PayPal.
    pub fn payer_id(&self) -> Option<&str> {
        self.payer_id.as_deref()
    }

    /// Whether this is the payer's default funding source.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Financing offer accepted by the payer, if any.
    pub fn credit_financing(&self) -> Option<&PayPalCreditFinancing> {
        self.credit_financing.as_ref()
    }

    /// Payment method type label.
    pub fn type_label(&self) -> &'static str {
        Self::TYPE
    }
}

/// Raw field bag collected from a gateway response.
///
/// Every setter takes the value exactly as decoded; [`NonceBuilder::build`]
/// applies the defaulting rules in one step.
#[derive(Debug, Default)]
pub(crate) struct NonceBuilder {
    nonce: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    billing_address: Option<PostalAddress>,
    shipping_address: Option<PostalAddress>,
    client_metadata_id: Option<String>,
    payer_id: Option<String>,
    is_default: Option<bool>,
    credit_financing: Option<PayPalCreditFinancing>,
}

impl NonceBuilder {
    pub(crate) fn new(nonce: Option<String>) -> Self {
        Self {
            nonce,
            ..Default::default()
        }
    }

    pub(crate) fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub(crate) fn first_name(mut self, first_name: Option<String>) -> Self {
        self.first_name = first_name;
        self
    }

    pub(crate) fn last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub(crate) fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub(crate) fn billing_address(mut self, address: Option<PostalAddress>) -> Self {
        self.billing_address = address;
        self
    }

    pub(crate) fn shipping_address(mut self, address: Option<PostalAddress>) -> Self {
        self.shipping_address = address;
        self
    }

    pub(crate) fn client_metadata_id(mut self, id: Option<String>) -> Self {
        self.client_metadata_id = id;
        self
    }

    pub(crate) fn payer_id(mut self, payer_id: Option<String>) -> Self {
        self.payer_id = payer_id;
        self
    }

    pub(crate) fn is_default(mut self, is_default: Option<bool>) -> Self {
        self.is_default = is_default;
        self
    }

    pub(crate) fn credit_financing(mut self, financing: Option<PayPalCreditFinancing>) -> Self {
        self.credit_financing = financing;
        self
    }

    /// Assemble the nonce.
    ///
    /// Fails with [`PayPalError::MissingRequiredToken`] when the token is
    /// absent or empty. Empty contact fields (email, names, phone) become
    /// `None`; identifiers pass through as sent. `is_default` is `true` only
    /// when the gateway sent an explicit `true`.
    pub(crate) fn build(self) -> Result<PayPalAccountNonce> {
        let nonce = non_empty(self.nonce).ok_or(PayPalError::MissingRequiredToken)?;

        Ok(PayPalAccountNonce {
            nonce,
            email: non_empty(self.email),
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            phone: non_empty(self.phone),
            billing_address: self.billing_address,
            shipping_address: self.shipping_address,
            client_metadata_id: self.client_metadata_id,
            payer_id: self.payer_id,
            is_default: self.is_default.unwrap_or(false),
            credit_financing: self.credit_financing,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
