//! Structured vCard values.
//!
//! These types hold the components of N and ADR. Components are joined
//! with `;` when the value is stored on a card; escaping is left to the
//! encoder.

/// Structured name (N field, RFC 2426 §3.1.2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: String,
    /// Additional (middle) names.
    pub additional: String,
    /// Honorific prefix (e.g. "Dr.").
    pub prefix: String,
    /// Honorific suffix (e.g. "Jr.").
    pub suffix: String,
}

impl StructuredName {
    /// Returns the field value: `family;given;additional;prefix;suffix`.
    #[must_use]
    pub fn to_value(&self) -> String {
        [
            self.family.as_str(),
            self.given.as_str(),
            self.additional.as_str(),
            self.prefix.as_str(),
            self.suffix.as_str(),
        ]
        .join(";")
    }
}

/// Delivery address (ADR field, RFC 2426 §3.2.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: String,
    /// Extended address (e.g. apartment or suite number).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl Address {
    /// Returns the field value:
    /// `po_box;extended;street;locality;region;postal_code;country`.
    #[must_use]
    pub fn to_value(&self) -> String {
        [
            self.po_box.as_str(),
            self.extended.as_str(),
            self.street.as_str(),
            self.locality.as_str(),
            self.region.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_value_keeps_empty_components() {
        let name = StructuredName {
            family: "Doe".to_string(),
            given: "Jane".to_string(),
            ..StructuredName::default()
        };
        assert_eq!(name.to_value(), "Doe;Jane;;;");
    }

    #[test]
    fn full_name_value() {
        let name = StructuredName {
            family: "Public".to_string(),
            given: "John".to_string(),
            additional: "Quinlan".to_string(),
            prefix: "Mr.".to_string(),
            suffix: "Esq.".to_string(),
        };
        assert_eq!(name.to_value(), "Public;John;Quinlan;Mr.;Esq.");
    }

    #[test]
    fn address_value_has_seven_components() {
        let addr = Address {
            street: "123 Main St".to_string(),
            locality: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            ..Address::default()
        };
        assert_eq!(addr.to_value(), ";;123 Main St;Springfield;;12345;USA");
        assert_eq!(Address::default().to_value().matches(';').count(), 6);
    }
}
