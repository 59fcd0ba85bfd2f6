//! Route definitions for the per-category catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes mounted under `/api`.
///
/// ```text
/// GET    /{category}            -> list_items
/// POST   /{category}            -> create_item
/// GET    /{category}/buscar     -> search_items
/// *      /{category}/buscar     -> search_segment_as_id
/// GET    /{category}/{id}       -> get_item
/// PUT    /{category}/{id}       -> update_item
/// DELETE /{category}/{id}       -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{category}",
            get(catalog::list_items).post(catalog::create_item),
        )
        .route(
            "/{category}/buscar",
            get(catalog::search_items).fallback(catalog::search_segment_as_id),
        )
        .route(
            "/{category}/{id}",
            get(catalog::get_item)
                .put(catalog::update_item)
                .delete(catalog::delete_item),
        )
}
