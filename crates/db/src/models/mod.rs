//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - The serialized response shape
//! - `Deserialize` DTOs for inserts and updates

pub mod catalog_item;
