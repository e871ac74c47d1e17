//! vCard parameter types.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// The TYPE parameter name.
pub const TYPE: &str = "TYPE";

/// Parameters attached to a field.
///
/// A parameter name may carry several values (e.g. `TYPE=INTERNET` and
/// `TYPE=HOME`). Names are normalized to uppercase and iterate in
/// ascending order; values keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, Vec<String>>);

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for the parameter `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0
            .entry(name.into().to_ascii_uppercase())
            .or_default()
            .push(value.into());
    }

    /// Returns all values of a parameter, empty if it is not set.
    #[must_use]
    pub fn get(&self, name: &str) -> &[String] {
        self.0
            .get(&name.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameter names and their values.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
