use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use catalogo_core::category::{Category, CategoryRejection};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Health check payload when the store answers.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Always `"up"` in this shape.
    pub db: &'static str,
    /// The allowlisted tables.
    pub tables: [Category; 3],
}

/// Health check payload when the store does not answer.
#[derive(Serialize)]
pub struct HealthFailure {
    pub ok: bool,
    pub error: &'static str,
}

/// GET /api/health -- pings the store through the pool.
async fn health_check(State(state): State<AppState>) -> Response {
    match catalogo_db::health_check(&state.pool).await {
        Ok(()) => Json(HealthResponse {
            ok: true,
            db: "up",
            tables: Category::ALL,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure {
                    ok: false,
                    error: "DB down",
                }),
            )
                .into_response()
        }
    }
}

/// Any other method on /api/health: `health` is read as a table name.
async fn health_as_table() -> AppError {
    CategoryRejection {
        value: "health".to_string(),
    }
    .into()
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check).fallback(health_as_table))
}
