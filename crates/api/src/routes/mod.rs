pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          liveness + store ping (GET)
///
/// /{category}                      list, create (GET, POST)
/// /{category}/buscar?q=            name search (GET)
/// /{category}/{id}                 get, update, delete (GET, PUT, DELETE)
/// ```
///
/// `{category}` is one of `carnes`, `importados`, `lacteos`. The static
/// `health` and `buscar` segments take priority over the captures; other
/// methods on them answer as the capture would (`Tabla no permitida` for
/// `health`, `ID inválido` for `buscar` once the category passes).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
}
