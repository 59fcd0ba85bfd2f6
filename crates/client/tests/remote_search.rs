//! End-to-end tests for the view and HTTP client against a stub catalog
//! service bound to an ephemeral local port.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use catalogo_client::api::{CatalogApi, CatalogApiError};
use catalogo_client::display::display_catalog;
use catalogo_client::view::{CategoryView, Completion};
use catalogo_core::category::Category;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Dairy search answers a single matching row; anything else is empty.
async fn buscar(Path(table): Path<String>, Query(params): Query<SearchParams>) -> Json<Value> {
    let q = params.q.unwrap_or_default().to_lowercase();
    if table == "lacteos" && !q.trim().is_empty() && "leche entera pasteurizada 1l".contains(q.trim()) {
        Json(json!([{
            "id": 1,
            "nombre": "Leche Entera Pasteurizada 1L",
            "descripcion": "",
            "precio": null,
            "imagen": "",
        }]))
    } else {
        Json(json!([]))
    }
}

async fn broken() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Error interno del servidor" })),
    )
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn healthy_service() -> String {
    serve(Router::new().route("/api/{table}/buscar", get(buscar))).await
}

async fn broken_service() -> String {
    serve(Router::new().route("/api/{table}/buscar", get(broken))).await
}

// ---------------------------------------------------------------------------
// Reconciled search over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn leche_query_keeps_matching_static_record() {
    let api = CatalogApi::new(healthy_service().await);
    let mut view = CategoryView::new(Category::Lacteos);

    let completion = view.search(&api, "leche").await;

    assert_eq!(completion, Completion::Applied);
    let names: Vec<&str> = view.displayed().iter().map(|r| r.nombre).collect();
    assert!(names.contains(&"Leche Entera Pasteurizada 1L"));
    assert!(!names.contains(&"Queso Seco 500g"));
    assert!(view
        .displayed()
        .iter()
        .all(|r| display_catalog(Category::Lacteos).contains(r)));
}

#[tokio::test]
async fn server_error_empties_the_display() {
    let api = CatalogApi::new(broken_service().await);
    let mut view = CategoryView::new(Category::Lacteos);

    view.search(&api, "leche").await;

    assert!(view.displayed().is_empty());
}

#[tokio::test]
async fn unreachable_service_empties_the_display() {
    // Bind then drop a listener to get a port nothing is serving.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = CatalogApi::new(format!("http://{addr}/api"));
    let mut view = CategoryView::new(Category::Carnes);

    view.search(&api, "pollo").await;

    assert!(view.displayed().is_empty());
}

#[tokio::test]
async fn clearing_after_filter_restores_exact_baseline() {
    let api = CatalogApi::new(healthy_service().await);
    let mut view = CategoryView::new(Category::Lacteos);

    view.search(&api, "leche entera").await;
    assert_eq!(view.displayed().len(), 1);

    view.search(&api, "").await;
    assert_eq!(view.displayed(), display_catalog(Category::Lacteos));
}

// ---------------------------------------------------------------------------
// Raw client errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    let api = CatalogApi::new(broken_service().await);

    let err = api.search(Category::Lacteos, "leche").await.unwrap_err();

    assert_matches!(err, CatalogApiError::ApiError { status: 500, body } if body.contains("Error interno"));
}

#[tokio::test]
async fn search_sends_query_parameter_encoded() {
    let api = CatalogApi::new(healthy_service().await);

    let items = api
        .search(Category::Lacteos, "Leche Entera")
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, Some(1));
}
