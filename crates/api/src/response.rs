//! Response bodies shared by the write endpoints.
//!
//! Reads return bare records or arrays; writes acknowledge with these small
//! fixed shapes.

use catalogo_core::types::DbId;
use serde::Serialize;

/// `{ "ok": true }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{ "id": ... }` body returned with `201 Created`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}
