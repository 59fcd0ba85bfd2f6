//! Catalog record models and DTOs.
//!
//! Only `id` and `nombre` are stored. Callers still expect `descripcion`,
//! `precio` and `imagen`, so [`CatalogItem`] carries them with fixed
//! placeholder values.

use catalogo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from any of the category tables.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CatalogRow {
    pub id: DbId,
    pub nombre: String,
}

/// Response shape for a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: DbId,
    pub nombre: String,
    /// Not persisted; always empty.
    pub descripcion: String,
    /// Not persisted; always `null`.
    pub precio: Option<f64>,
    /// Not persisted; always empty.
    pub imagen: String,
}

impl From<CatalogRow> for CatalogItem {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            descripcion: String::new(),
            precio: None,
            imagen: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a catalog record.
///
/// `nombre` is optional at the serde level so a missing field reaches the
/// handler's validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCatalogItem {
    pub nombre: Option<String>,
}

/// DTO for renaming a catalog record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCatalogItem {
    pub nombre: Option<String>,
}
