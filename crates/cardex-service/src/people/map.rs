//! People record to vCard mapping.

use cardex_rfc::rfc::vcard::core::TYPE;
use cardex_rfc::rfc::vcard::{Address, Card, Field, Params, StructuredName, names};

use super::groups::GroupDirectory;
use super::record::{Date, Person};
use crate::error::{MapError, MapResult};

/// vCard version written on every card.
pub const VCARD_VERSION: &str = "3.0";

/// TYPE value marking an Internet mail address.
const INTERNET: &str = "INTERNET";

/// ## Summary
/// Builds a vCard 3.0 card from one people record.
///
/// Only the first name entry is used. Memberships resolve through
/// `groups`; an unknown group becomes an empty category. Source types are
/// upper-cased into TYPE parameters.
///
/// ## Errors
/// Returns `MapError::NoName` if the record has no name entries.
pub fn person_to_card(person: &Person, groups: &GroupDirectory) -> MapResult<Card> {
    let Some(name) = person.names.first() else {
        return Err(MapError::NoName);
    };

    let mut card = Card::new();
    card.add_value(names::VERSION, VCARD_VERSION);

    card.add_name(&StructuredName {
        family: name.family_name.clone(),
        given: name.given_name.clone(),
        additional: name.middle_name.clone(),
        prefix: name.honorific_prefix.clone(),
        suffix: name.honorific_suffix.clone(),
    });
    card.add_value(names::FN, name.display_name.as_str());

    for membership in &person.memberships {
        card.add_value(
            names::CATEGORIES,
            groups.resolve(membership.group_resource_name()),
        );
    }

    for email in &person.email_addresses {
        let mut params = Params::new();
        params.add(TYPE, INTERNET);
        params.add(TYPE, type_value(&email.kind));
        card.add(names::EMAIL, Field::with_params(email.value.as_str(), params));
    }

    for phone in &person.phone_numbers {
        card.add(
            names::TEL,
            Field::with_params(phone.canonical_form.as_str(), type_params(&phone.kind)),
        );
    }

    for birthday in &person.birthdays {
        match &birthday.date {
            Some(date) => card.add_value(names::BIRTHDAY, format_date(*date)),
            None => tracing::debug!(
                resource_name = %person.resource_name,
                text = %birthday.text,
                "Skipping birthday without a structured date"
            ),
        }
    }

    for address in &person.addresses {
        let mut field = Field::default();
        if !address.kind.is_empty() {
            field.add_param(TYPE, type_value(&address.kind));
        }

        card.add_address(
            &Address {
                po_box: address.po_box.clone(),
                extended: address.extended_address.clone(),
                street: address.street_address.clone(),
                locality: address.city.clone(),
                region: address.region.clone(),
                postal_code: address.postal_code.clone(),
                country: address.country.clone(),
            },
            field,
        );
    }

    for org in &person.organizations {
        if org.department.is_empty() {
            card.add_value(names::ORG, org.name.as_str());
        } else {
            card.add_value(names::ORG, format!("{};{}", org.name, org.department));
        }
    }

    // Only the first organization may contribute a title.
    if let Some(org) = person.organizations.first()
        && !org.title.is_empty()
    {
        card.add_value(names::TITLE, org.title.as_str());
    }

    for url in &person.urls {
        card.add(
            names::URL,
            Field::with_params(url.value.as_str(), type_params(&url.kind)),
        );
    }

    for photo in &person.photos {
        card.add_value(names::PHOTO, photo.url.as_str());
    }

    for bio in &person.biographies {
        card.add_value(names::NOTE, bio.value.as_str());
    }

    Ok(card)
}

/// Upper-cases a source type for use as a TYPE value.
///
/// Simple case folding: each char maps to exactly one char. Chars whose
/// upper case expands (`ß` to `SS`) are kept as they are.
fn type_value(kind: &str) -> String {
    kind.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            if upper.len() == 1 {
                upper.next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// A parameter set holding a single folded TYPE value.
fn type_params(kind: &str) -> Params {
    let mut params = Params::new();
    params.add(TYPE, type_value(kind));
    params
}

/// Formats a date as `YYYYMMDD`, zero padded, without range checks.
fn format_date(date: Date) -> String {
    format!("{:04}{:02}{:02}", date.year, date.month, date.day)
}
