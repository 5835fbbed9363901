//! Postal addresses attached to PayPal accounts.

use serde::{Deserialize, Serialize};

/// A postal address as reported by the gateway.
///
/// Fields are passed through verbatim. Nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    /// Recipient name, e.g. "Jane Doe".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    /// Street address, e.g. "123 First Ave".
    #[serde(
        default,
        alias = "line1",
        alias = "street1",
        skip_serializing_if = "Option::is_none"
    )]
    pub street_address: Option<String>,

    /// Apartment, suite or unit, e.g. "Apt 123".
    #[serde(
        default,
        alias = "line2",
        alias = "street2",
        skip_serializing_if = "Option::is_none"
    )]
    pub extended_address: Option<String>,

    /// City or locality.
    #[serde(default, alias = "city", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// State or region.
    #[serde(default, alias = "state", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ZIP or postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter ISO 3166-1 country code, e.g. "US".
    #[serde(
        default,
        alias = "countryCode",
        alias = "country",
        skip_serializing_if = "Option::is_none"
    )]
    pub country_code_alpha2: Option<String>,
}

impl PostalAddress {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.recipient_name.is_none()
            && self.street_address.is_none()
            && self.extended_address.is_none()
            && self.locality.is_none()
            && self.region.is_none()
            && self.postal_code.is_none()
            && self.country_code_alpha2.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gateway_key_variants() {
        let address: PostalAddress = serde_json::from_value(json!({
            "recipientName": "Jane Doe",
            "line1": "1 Main St",
            "line2": "Unit 2",
            "city": "Chicago",
            "state": "IL",
            "postalCode": "60654",
            "countryCode": "US"
        }))
        .unwrap();

        assert_eq!(address.recipient_name.as_deref(), Some("Jane Doe"));
        assert_eq!(address.street_address.as_deref(), Some("1 Main St"));
        assert_eq!(address.extended_address.as_deref(), Some("Unit 2"));
        assert_eq!(address.locality.as_deref(), Some("Chicago"));
        assert_eq!(address.region.as_deref(), Some("IL"));
        assert_eq!(address.postal_code.as_deref(), Some("60654"));
        assert_eq!(address.country_code_alpha2.as_deref(), Some("US"));
    }

    #[test]
    fn test_street_keys() {
        let address: PostalAddress =
            serde_json::from_value(json!({ "street1": "9 Elm", "street2": "Rear" })).unwrap();
        assert_eq!(address.street_address.as_deref(), Some("9 Elm"));
        assert_eq!(address.extended_address.as_deref(), Some("Rear"));
        assert_eq!(address.locality, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(PostalAddress::default().is_empty());
        let address = PostalAddress {
            postal_code: Some("94107".into()),
            ..Default::default()
        };
        assert!(!address.is_empty());
    }
}
