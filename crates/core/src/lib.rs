//! Domain building blocks shared by the catalog service and its clients.
//!
//! This crate has no I/O: category allowlisting, error taxonomy, and the
//! accent-insensitive name normalization used when matching product names.

pub mod category;
pub mod error;
pub mod normalize;
pub mod types;
