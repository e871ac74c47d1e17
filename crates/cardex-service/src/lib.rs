//! Contact record mapping and export.
//!
//! - [`people`] - People-service record types, group lookup and the mapper
//! - [`export`] - Per-record map-then-encode driver

pub mod error;
pub mod export;
pub mod people;
