//! vCard card type.

use std::collections::HashMap;

use super::field::Field;
use super::structured::{Address, StructuredName};

/// A contact card.
///
/// Fields are grouped by name. Names are case-insensitive and stored
/// uppercased; each stored name holds at least one field, in insertion
/// order. The map itself has no meaningful order, the encoder sorts names
/// when writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    fields: HashMap<String, Vec<Field>>,
}

impl Card {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field under `name`.
    pub fn add(&mut self, name: &str, field: Field) {
        self.fields
            .entry(name.to_ascii_uppercase())
            .or_default()
            .push(field);
    }

    /// Appends a field with a plain value and no parameters.
    pub fn add_value(&mut self, name: &str, value: impl Into<String>) {
        self.add(name, Field::new(value));
    }

    /// Adds an N field built from the structured name.
    pub fn add_name(&mut self, name: &StructuredName) {
        self.add_value(names::N, name.to_value());
    }

    /// Adds an ADR field. `field` supplies parameters and group; its value
    /// is replaced by the joined address components.
    pub fn add_address(&mut self, address: &Address, mut field: Field) {
        field.value = address.to_value();
        self.add(names::ADR, field);
    }

    /// Returns the first field with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields(name).first()
    }

    /// Returns all fields with the given name, empty if there are none.
    #[must_use]
    pub fn fields(&self, name: &str) -> &[Field] {
        self.fields
            .get(&name.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the value of the first field with the given name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|f| f.value.as_str())
    }

    /// Iterates over the stored field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of distinct field names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the card holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field names used by the mapper and encoder.
pub mod names {
    pub const VERSION: &str = "VERSION";
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const PHOTO: &str = "PHOTO";
    pub const BIRTHDAY: &str = "BIRTHDAY";
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const TITLE: &str = "TITLE";
    pub const ORG: &str = "ORG";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";
}
