//! Request extractors that validate path input before any store access.
//!
//! - [`catalog::CatalogTable`] -- Allowlisted category from `{category}`.
//! - [`catalog::RecordPath`] -- Allowlisted category plus integer `{id}`.

pub mod catalog;
