//! Shared configuration and error types for the cardex workspace.

pub mod config;
pub mod error;
