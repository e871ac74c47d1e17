//! People-service record types.
//!
//! Every field defaults when absent from the JSON, matching the API which
//! omits empty values.

use serde::Deserialize;

/// A contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    /// Resource id, e.g. `people/c1234`.
    pub resource_name: String,
    pub names: Vec<Name>,
    pub email_addresses: Vec<EmailAddress>,
    pub phone_numbers: Vec<PhoneNumber>,
    pub birthdays: Vec<Birthday>,
    pub addresses: Vec<PostalAddress>,
    pub organizations: Vec<Organization>,
    pub urls: Vec<Url>,
    pub photos: Vec<Photo>,
    pub biographies: Vec<Biography>,
    pub memberships: Vec<Membership>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Name {
    /// Precomputed display string, used for FN.
    pub display_name: String,
    pub family_name: String,
    pub given_name: String,
    pub middle_name: String,
    pub honorific_prefix: String,
    pub honorific_suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailAddress {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Number as entered by the user.
    pub value: String,
    /// E.164 form, e.g. `+4915112345678`.
    pub canonical_form: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Birthday {
    pub date: Option<Date>,
    /// Free-form birthday text, set when no structured date exists.
    pub text: String,
}

/// Calendar date; zero marks an unknown component. Values are not
/// range-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "type")]
    pub kind: String,
    pub po_box: String,
    pub extended_address: String,
    pub street_address: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub department: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Url {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Biography {
    pub value: String,
}

/// Group membership. Only contact-group memberships carry a resource id;
/// other membership kinds leave it `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Membership {
    pub contact_group_membership: Option<ContactGroupMembership>,
}

impl Membership {
    /// Returns the referenced contact group's resource id, empty if none.
    #[must_use]
    pub fn group_resource_name(&self) -> &str {
        self.contact_group_membership
            .as_ref()
            .map_or("", |m| m.contact_group_resource_name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactGroupMembership {
    pub contact_group_resource_name: String,
}
