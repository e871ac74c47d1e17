//! Batch export of people records to vCard.

use std::io::Write;

use cardex_rfc::rfc::vcard::{EncodeError, Encoder};

use crate::people::{GroupDirectory, Person, person_to_card};

/// Outcome counts of one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Cards written completely.
    pub exported: usize,
    /// Records that could not be mapped (no name).
    pub skipped: usize,
    /// Cards whose encoding failed part way.
    pub failed: usize,
}

/// ## Summary
/// Maps and encodes every record, one card per record.
///
/// Records that fail to map are skipped. Encode failures are logged and
/// counted; the export continues with the next record.
///
/// ## Side Effects
/// Writes to the encoder's sink. A failed card may leave a partial block
/// behind.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn export_cards<'a, W: Write>(
    people: impl IntoIterator<Item = &'a Person>,
    groups: &GroupDirectory,
    encoder: &mut Encoder<W>,
) -> ExportSummary {
    let mut summary = ExportSummary::default();

    for person in people {
        let card = match person_to_card(person, groups) {
            Ok(card) => card,
            Err(e) => {
                tracing::debug!(resource_name = %person.resource_name, error = %e, "Skipping record");
                summary.skipped += 1;
                continue;
            }
        };

        match encoder.encode(&card) {
            Ok(()) => summary.exported += 1,
            Err(e @ EncodeError::MissingVersion) => {
                tracing::error!(resource_name = %person.resource_name, error = %e, "Mapped card is missing VERSION");
                summary.failed += 1;
            }
            Err(e) => {
                tracing::warn!(resource_name = %person.resource_name, error = %e, "Failed to encode card");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        exported = summary.exported,
        skipped = summary.skipped,
        failed = summary.failed,
        "Export finished"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::Name;

    fn person(display: &str) -> Person {
        Person {
            names: vec![Name {
                display_name: display.to_string(),
                ..Name::default()
            }],
            ..Person::default()
        }
    }

    #[test_log::test]
    fn skips_nameless_records() {
        let people = [person("Jane Doe"), Person::default(), person("John Doe")];
        let mut encoder = Encoder::new(Vec::new());

        let summary = export_cards(&people, &GroupDirectory::new(), &mut encoder);

        assert_eq!(
            summary,
            ExportSummary {
                exported: 2,
                skipped: 1,
                failed: 0
            }
        );
        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output.matches("BEGIN:VCARD").count(), 2);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let people: [Person; 0] = [];
        let mut encoder = Encoder::new(Vec::new());
        let summary = export_cards(&people, &GroupDirectory::new(), &mut encoder);

        assert_eq!(summary, ExportSummary::default());
        assert!(encoder.into_inner().is_empty());
    }
}
