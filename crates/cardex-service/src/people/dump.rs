//! Materialized JSON dumps of people and contact groups.
//!
//! Both accept either a bare array or the list-response object the
//! service returns for a single page.

use serde::Deserialize;

use super::groups::ContactGroup;
use super::record::Person;

#[derive(Deserialize)]
#[serde(untagged)]
enum PeopleDump {
    Records(Vec<Person>),
    Page(ConnectionsPage),
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ConnectionsPage {
    connections: Vec<Person>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupsDump {
    Records(Vec<ContactGroup>),
    Page(ContactGroupsPage),
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ContactGroupsPage {
    contact_groups: Vec<ContactGroup>,
}

/// ## Summary
/// Parses a people dump: `[Person, ...]` or `{ "connections": [...] }`.
///
/// ## Errors
/// Returns an error if the JSON matches neither shape.
pub fn parse_people(json: &str) -> serde_json::Result<Vec<Person>> {
    Ok(match serde_json::from_str(json)? {
        PeopleDump::Records(people) => people,
        PeopleDump::Page(page) => page.connections,
    })
}

/// ## Summary
/// Parses a contact-group dump: `[ContactGroup, ...]` or
/// `{ "contactGroups": [...] }`.
///
/// ## Errors
/// Returns an error if the JSON matches neither shape.
pub fn parse_groups(json: &str) -> serde_json::Result<Vec<ContactGroup>> {
    Ok(match serde_json::from_str(json)? {
        GroupsDump::Records(groups) => groups,
        GroupsDump::Page(page) => page.contact_groups,
    })
}
