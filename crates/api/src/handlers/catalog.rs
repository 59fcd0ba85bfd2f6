//! Handlers for the per-category catalog endpoints.
//!
//! Every handler receives an already-validated [`Category`] through the
//! [`CatalogTable`] / [`RecordPath`] extractors, so store access only ever
//! happens for allowlisted tables.
//!
//! [`Category`]: catalogo_core::category::Category

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalogo_core::error::CoreError;
use catalogo_db::models::catalog_item::{CatalogItem, CreateCatalogItem, UpdateCatalogItem};
use catalogo_db::repositories::CatalogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::catalog::{CatalogTable, RecordPath, INVALID_ID_MESSAGE};
use crate::query::SearchParams;
use crate::response::{CreatedResponse, OkResponse};
use crate::state::AppState;

/// Message returned when a write body lacks a usable `nombre`.
pub const NOMBRE_REQUIRED_MESSAGE: &str = "nombre es requerido";

/// GET /api/{category}
///
/// List every record in the category, ordered by id.
pub async fn list_items(
    State(state): State<AppState>,
    CatalogTable(category): CatalogTable,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let items = CatalogRepo::list(&state.pool, category).await?;
    Ok(Json(items))
}

/// GET /api/{category}/buscar?q=
///
/// Accent- and case-insensitive substring search on `nombre`. A blank `q`
/// answers `[]` without touching the store. A query string that does not
/// decode (e.g. a repeated `q`) is a 400.
pub async fn search_items(
    State(state): State<AppState>,
    CatalogTable(category): CatalogTable,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let Some(q) = params.term() else {
        return Ok(Json(Vec::new()));
    };

    let items = CatalogRepo::search(&state.pool, category, q).await?;
    Ok(Json(items))
}

/// Any other method on /api/{category}/buscar
///
/// `buscar` stands where a record id would, so once the category passes it
/// is refused as an id.
pub async fn search_segment_as_id(CatalogTable(_): CatalogTable) -> AppError {
    AppError::BadRequest(INVALID_ID_MESSAGE.to_string())
}

/// GET /api/{category}/{id}
pub async fn get_item(
    State(state): State<AppState>,
    RecordPath { category, id }: RecordPath,
) -> AppResult<Json<CatalogItem>> {
    let item = CatalogRepo::find_by_id(&state.pool, category, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: category.as_str(),
            id,
        }))?;

    Ok(Json(item))
}

/// POST /api/{category}
///
/// Insert a record from `{ "nombre": ... }`. Responds `201 { "id": ... }`.
pub async fn create_item(
    State(state): State<AppState>,
    CatalogTable(category): CatalogTable,
    body: Result<Json<CreateCatalogItem>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let nombre = required_nombre(body.map(|Json(b)| b.nombre))?;

    let id = CatalogRepo::create(&state.pool, category, &nombre).await?;

    tracing::info!(%category, id, nombre = %nombre, "Catalog item created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/{category}/{id}
///
/// Rename a record. Answers `{ "ok": true }` whether or not the id exists.
pub async fn update_item(
    State(state): State<AppState>,
    RecordPath { category, id }: RecordPath,
    body: Result<Json<UpdateCatalogItem>, JsonRejection>,
) -> AppResult<Json<OkResponse>> {
    let nombre = required_nombre(body.map(|Json(b)| b.nombre))?;

    let touched = CatalogRepo::update(&state.pool, category, id, &nombre).await?;

    tracing::info!(%category, id, touched, "Catalog item updated");

    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/{category}/{id}
///
/// Answers `{ "ok": true }` whether or not the id exists.
pub async fn delete_item(
    State(state): State<AppState>,
    RecordPath { category, id }: RecordPath,
) -> AppResult<Json<OkResponse>> {
    let removed = CatalogRepo::delete(&state.pool, category, id).await?;

    tracing::info!(%category, id, removed, "Catalog item deleted");

    Ok(Json(OkResponse::ok()))
}

/// Pull a non-blank, trimmed `nombre` out of a write body.
///
/// An unreadable body (bad JSON, wrong content type) counts as a missing
/// name rather than a distinct error.
fn required_nombre(body: Result<Option<String>, JsonRejection>) -> AppResult<String> {
    let nombre = body
        .map_err(|rejection| {
            tracing::debug!(error = %rejection, "Unreadable catalog body");
        })
        .ok()
        .flatten();

    match nombre.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(AppError::Core(CoreError::Validation(
            NOMBRE_REQUIRED_MESSAGE.to_string(),
        ))),
    }
}
