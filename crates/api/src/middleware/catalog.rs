//! Path extractors for the catalog routes.
//!
//! Both extractors reject with [`AppError`], so an unknown table or a
//! malformed id produces the standard JSON error body and never reaches a
//! handler.

use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{FromRequestParts, MatchedPath, RawPathParams};
use axum::http::request::Parts;
use catalogo_core::category::Category;
use catalogo_core::types::DbId;

use crate::error::AppError;

/// Message returned for a non-integer `{id}` segment.
pub const INVALID_ID_MESSAGE: &str = "ID inválido";

/// The allowlisted category named by the `{category}` path segment.
///
/// ```ignore
/// async fn list(CatalogTable(category): CatalogTable) -> AppResult<Json<()>> {
///     tracing::info!(%category, "listing");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogTable(pub Category);

impl<S> FromRequestParts<S> for CatalogTable
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| path_rejection(parts, e, false))?;

        let raw = path_param(&params, "category")?;
        Ok(CatalogTable(Category::parse(raw)?))
    }
}

/// A single record address: `/{category}/{id}`.
///
/// The category is checked before the id, so `/usuarios/abc` reports the
/// table, not the id.
#[derive(Debug, Clone, Copy)]
pub struct RecordPath {
    pub category: Category,
    pub id: DbId,
}

impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| path_rejection(parts, e, true))?;

        let category = Category::parse(path_param(&params, "category")?)?;
        let id = parse_id(path_param(&params, "id")?)?;

        Ok(RecordPath { category, id })
    }
}

/// Parse an `{id}` segment as a store identifier.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}

fn path_param<'a>(params: &'a RawPathParams, name: &str) -> Result<&'a str, AppError> {
    params
        .iter()
        .find_map(|(key, value)| (key == name).then_some(value))
        .ok_or_else(|| AppError::InternalError(format!("route is missing the {{{name}}} segment")))
}

/// Map a failed path decode to the same errors a decodable path would get.
///
/// Allowlisted names are ASCII, so the category is judged on its raw
/// segment. Only with an allowlisted category can the id be blamed.
fn path_rejection(parts: &Parts, rejection: RawPathParamsRejection, has_id: bool) -> AppError {
    match &rejection {
        RawPathParamsRejection::InvalidUtf8InPathParam(_) => {
            match Category::parse(raw_segment(parts, "category").unwrap_or_default()) {
                Err(rejected) => rejected.into(),
                Ok(_) if has_id => AppError::BadRequest(INVALID_ID_MESSAGE.to_string()),
                Ok(_) => AppError::BadRequest(rejection.body_text()),
            }
        }
        _ => AppError::BadRequest(rejection.body_text()),
    }
}

/// The undecoded URI segment sitting where the `{name}` capture matched.
///
/// Positions are counted from the end, which holds whether or not the
/// router stripped a nesting prefix from the URI.
fn raw_segment<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    let matched = parts.extensions.get::<MatchedPath>()?;
    let capture = format!("{{{name}}}");
    let from_end = matched.as_str().rsplit('/').position(|s| s == capture)?;
    parts.uri.path().rsplit('/').nth(from_end)
}
