//! vCard encode error types.

use thiserror::Error;

/// Result type for vCard encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// An error that occurred while encoding a card.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The card has no VERSION field.
    #[error("vcard: VERSION field missing")]
    MissingVersion,

    /// The sink rejected a write.
    #[error("vcard: write failed: {0}")]
    Io(#[from] std::io::Error),
}
