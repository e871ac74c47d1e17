//! vCard 3.0 card model and encoder.

pub mod rfc;
