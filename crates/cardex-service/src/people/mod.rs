//! People-service contacts.
//!
//! The record types mirror the JSON shape of the people directory API
//! (`names`, `emailAddresses`, `memberships`, ...). Records arrive fully
//! materialized; fetching and paging them is the caller's business.

mod dump;
mod groups;
mod map;
mod record;

pub use dump::{parse_groups, parse_people};
pub use groups::{ContactGroup, GroupDirectory};
pub use map::{VCARD_VERSION, person_to_card};
pub use record::{
    Biography, Birthday, ContactGroupMembership, Date, EmailAddress, Membership, Name,
    Organization, Person, PhoneNumber, Photo, PostalAddress, Url,
};
