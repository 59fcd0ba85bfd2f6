/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is owned by the binary, which closes it after the server stops.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: catalogo_db::DbPool,
}
