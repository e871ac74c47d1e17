//! Shared helpers for encoder tests.

use std::io::{self, Write};

use crate::rfc::vcard::core::{Card, names};
use crate::rfc::vcard::build::Encoder;

/// Card holding only the mandatory VERSION field.
pub fn versioned_card() -> Card {
    let mut card = Card::new();
    card.add_value(names::VERSION, "3.0");
    card
}

/// Encodes a single card into a string.
pub fn encode_to_string(card: &Card) -> String {
    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(card).unwrap();
    String::from_utf8(encoder.into_inner()).unwrap()
}

/// Returns the lines between `VERSION` and `END:VCARD`.
pub fn body_lines(output: &str) -> Vec<&str> {
    let lines: Vec<&str> = output.split_terminator("\r\n").collect();
    lines[2..lines.len() - 1].to_vec()
}

/// Sink that accepts a fixed number of writes, then fails.
pub struct FailingWriter {
    pub written: Vec<u8>,
    remaining: usize,
}

impl FailingWriter {
    pub fn after(writes: usize) -> Self {
        Self {
            written: Vec::new(),
            remaining: writes,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.remaining -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
