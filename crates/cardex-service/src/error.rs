use thiserror::Error;

/// Errors raised while turning a source record into a card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("person has no name")]
    NoName,
}

pub type MapResult<T> = std::result::Result<T, MapError>;
