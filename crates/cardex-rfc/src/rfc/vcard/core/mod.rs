//! vCard core types.
//!
//! - [`Card`] - Field groups keyed by upper-cased field name
//! - [`Field`] - One value with its parameters and optional group
//! - [`Params`] - Parameter names mapped to their values
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N field (family, given, etc.)
//! - [`Address`] - ADR field
//!
//! Values are always stored unescaped. Escaping happens once, in
//! [`crate::rfc::vcard::build`].

mod card;
mod field;
mod parameter;
mod structured;

pub use card::{Card, names};
pub use field::Field;
pub use parameter::{Params, TYPE};
pub use structured::{Address, StructuredName};
