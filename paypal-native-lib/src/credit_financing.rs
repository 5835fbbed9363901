//! PayPal Credit financing offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount within a financing offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPalCreditFinancingAmount {
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Amount value as a decimal string to preserve precision.
    pub value: String,
}

impl PayPalCreditFinancingAmount {
    /// Create a new amount.
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for PayPalCreditFinancingAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Installment terms the payer accepted during authorization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalCreditFinancing {
    /// Whether the amount can be changed after the payer accepts the offer.
    #[serde(default)]
    pub card_amount_immutable: bool,

    /// Estimated amount per month the payer will need to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<PayPalCreditFinancingAmount>,

    /// Whether the payer's status changed during the flow.
    #[serde(default)]
    pub payer_acceptance: bool,

    /// Length of the financing term, in months.
    #[serde(default)]
    pub term: i64,

    /// Estimated total payment amount including interest and fees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<PayPalCreditFinancingAmount>,

    /// Estimated interest or fees the payer will have to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_interest: Option<PayPalCreditFinancingAmount>,
}
