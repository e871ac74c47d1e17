//! Streaming vCard encoder.

use std::io::Write;

use super::error::{EncodeError, EncodeResult};
use super::escape::escape_value;
use crate::rfc::vcard::core::{Card, Field, names};

const CRLF: &str = "\r\n";
const BEGIN_LINE: &str = const_str::concat!("BEGIN:VCARD", CRLF);
const END_LINE: &str = const_str::concat!("END:VCARD", CRLF);

/// Writes cards to a byte sink.
///
/// Every call to [`Encoder::encode`] appends one complete
/// `BEGIN:VCARD` ... `END:VCARD` block. Each line is written as soon as it
/// is formatted; on failure the lines already written stay on the sink.
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder that writes cards to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a reference to the underlying sink.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the encoder, returning the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// ## Summary
    /// Encodes one card.
    ///
    /// `BEGIN:VCARD` is written first, then `VERSION`, then every other
    /// field name in ordinal order. `CATEGORIES` entries share one line.
    ///
    /// ## Errors
    /// Returns `MissingVersion` if the card has no VERSION field (the begin
    /// line has already been written at that point), or `Io` on the first
    /// failed write.
    pub fn encode(&mut self, card: &Card) -> EncodeResult<()> {
        self.write_raw(BEGIN_LINE)?;

        let version = card.get(names::VERSION).ok_or(EncodeError::MissingVersion)?;
        self.write_line(&format_line(names::VERSION, version))?;

        let mut keys: Vec<&str> = card.names().collect();
        keys.sort_unstable();

        for key in keys {
            if key.eq_ignore_ascii_case(names::VERSION) {
                continue;
            }

            let fields = card.fields(key);

            if key.eq_ignore_ascii_case(names::CATEGORIES) {
                self.write_line(&format_multi_value_line(key, fields))?;
                continue;
            }

            for field in fields {
                self.write_line(&format_line(key, field))?;
            }
        }

        self.write_raw(END_LINE)?;

        tracing::trace!(fields = card.len(), "Encoded card");
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> EncodeResult<()> {
        let mut buf = String::with_capacity(line.len() + CRLF.len());
        buf.push_str(line);
        buf.push_str(CRLF);
        self.write_raw(&buf)
    }

    fn write_raw(&mut self, text: &str) -> EncodeResult<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// ## Summary
/// Formats one field as `[group.]NAME[;PARAM=value...]:value`, without
/// the line terminator.
///
/// Every value of a parameter gets its own `;PARAM=value` segment.
#[must_use]
pub fn format_line(name: &str, field: &Field) -> String {
    let mut line = String::new();

    if !field.group.is_empty() {
        line.push_str(&field.group);
        line.push('.');
    }
    line.push_str(name);

    for (param, values) in &field.params {
        for value in values {
            line.push(';');
            line.push_str(param);
            line.push('=');
            line.push_str(&escape_value(value));
        }
    }

    line.push(':');
    line.push_str(&escape_value(&field.value));
    line
}

/// ## Summary
/// Folds several fields into `NAME:v1,v2,...`, without the line terminator.
///
/// Each value is escaped on its own, so commas inside a value stay
/// distinguishable from the separators. Parameters and groups are dropped.
#[must_use]
pub fn format_multi_value_line(name: &str, fields: &[Field]) -> String {
    let values: Vec<String> = fields.iter().map(|f| escape_value(&f.value)).collect();

    let mut line = String::from(name);
    line.push(':');
    line.push_str(&values.join(","));
    line
}
