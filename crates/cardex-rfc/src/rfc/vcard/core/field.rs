//! vCard field type.

use super::parameter::Params;

/// A single field entry of a card.
///
/// `value` and the parameter values hold the logical, unescaped text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Field value.
    pub value: String,
    /// Parameters of the field.
    pub params: Params,
    /// Group prefix (e.g. "item1" in "item1.TEL"); empty means no group.
    pub group: String,
}

impl Field {
    /// Creates a field with a plain value and no parameters.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Creates a field with a value and a prepared parameter set.
    #[must_use]
    pub fn with_params(value: impl Into<String>, params: Params) -> Self {
        Self {
            value: value.into(),
            params,
            group: String::new(),
        }
    }

    /// Sets the group prefix.
    #[must_use]
    pub fn grouped(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Appends a parameter value.
    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.add(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::TYPE;

    #[test]
    fn field_new() {
        let field = Field::new("jane@example.com");
        assert_eq!(field.value, "jane@example.com");
        assert!(field.params.is_empty());
        assert!(field.group.is_empty());
    }

    #[test]
    fn field_grouped_with_param() {
        let mut field = Field::new("+1-555-555-5555").grouped("item1");
        field.add_param(TYPE, "CELL");

        assert_eq!(field.group, "item1");
        assert_eq!(field.params.get(TYPE), ["CELL"]);
    }

    #[test]
    fn field_with_prepared_params() {
        let mut params = Params::new();
        params.add(TYPE, "INTERNET");
        params.add(TYPE, "HOME");

        let field = Field::with_params("jane@example.com", params);

        assert_eq!(field.value, "jane@example.com");
        assert_eq!(field.params.get(TYPE), ["INTERNET", "HOME"]);
        assert!(field.group.is_empty());
    }
}
