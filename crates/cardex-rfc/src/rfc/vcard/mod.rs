//! vCard 3.0 implementation (RFC 2426).
//!
//! This module provides the card model and the encoder that writes it out
//! as `BEGIN:VCARD` ... `END:VCARD` blocks.
//!
//! ## Usage
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::{Card, Encoder, names};
//!
//! let mut card = Card::new();
//! card.add_value(names::VERSION, "3.0");
//! card.add_value(names::FN, "Jane Doe");
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(&card).unwrap();
//!
//! let output = String::from_utf8(encoder.into_inner()).unwrap();
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Card model (`Card`, `Field`, `Params`, structured values)
//! - [`build`] - Escaping and the streaming `Encoder`

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{EncodeError, EncodeResult, Encoder, escape_value};
pub use self::core::{Address, Card, Field, Params, StructuredName, names};
