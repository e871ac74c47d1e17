//! Contact-group lookup.

use std::collections::HashMap;

use serde::Deserialize;

/// A contact group as listed by the people service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactGroup {
    /// Resource id, e.g. `contactGroups/friends`.
    pub resource_name: String,
    /// Display name shown to the user.
    pub formatted_name: String,
}

/// Maps contact-group resource ids to display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDirectory {
    names: HashMap<String, String>,
}

impl GroupDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the directory from listed groups. A later group with the
    /// same resource id replaces an earlier one.
    #[must_use]
    pub fn from_groups(groups: impl IntoIterator<Item = ContactGroup>) -> Self {
        let directory: Self = groups
            .into_iter()
            .map(|g| (g.resource_name, g.formatted_name))
            .collect();

        tracing::info!(groups = directory.len(), "Found contact groups");
        directory
    }

    /// Registers a display name for a resource id.
    pub fn insert(&mut self, resource_name: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(resource_name.into(), display_name.into());
    }

    /// ## Summary
    /// Returns the display name for `resource_name`.
    ///
    /// Unknown ids resolve to the empty string rather than an error, so a
    /// membership in an unlisted group still yields a (blank) category.
    #[must_use]
    pub fn resolve(&self, resource_name: &str) -> &str {
        self.names.get(resource_name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for GroupDirectory {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(resource_name: &str, formatted_name: &str) -> ContactGroup {
        ContactGroup {
            resource_name: resource_name.to_string(),
            formatted_name: formatted_name.to_string(),
        }
    }

    #[test_log::test]
    fn from_groups_resolves_names() {
        let directory = GroupDirectory::from_groups([
            group("contactGroups/friends", "Friends"),
            group("contactGroups/work", "Work"),
        ]);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.resolve("contactGroups/friends"), "Friends");
        assert_eq!(directory.resolve("contactGroups/work"), "Work");
    }

    #[test]
    fn unknown_group_resolves_to_empty() {
        let mut directory = GroupDirectory::new();
        directory.insert("contactGroups/friends", "Friends");

        assert_eq!(directory.resolve("contactGroups/gone"), "");
        assert_eq!(directory.resolve(""), "");
    }

    #[test]
    fn later_duplicate_wins() {
        let directory = GroupDirectory::from_groups([
            group("contactGroups/a", "Old"),
            group("contactGroups/a", "New"),
        ]);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("contactGroups/a"), "New");
    }
}
