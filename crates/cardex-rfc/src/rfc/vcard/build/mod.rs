//! vCard serialization.
//!
//! ## Features
//!
//! - Text escaping of values and parameter values, applied once at write time
//! - Field names written in ordinal order after `VERSION`
//! - `CATEGORIES` entries folded onto a single line
//! - One write per physical line, CRLF terminated
//!
//! Long lines are not folded.

mod encoder;
mod error;
mod escape;

pub use encoder::{Encoder, format_line, format_multi_value_line};
pub use error::{EncodeError, EncodeResult};
pub use escape::escape_value;
