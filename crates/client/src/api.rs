//! REST API client for the catalog service.
//!
//! Wraps the `/api/{category}` endpoints (list, search, get, create, update,
//! delete) and `/api/health` using [`reqwest`].

use catalogo_core::category::Category;
use catalogo_core::types::DbId;
use serde::{Deserialize, Serialize};

/// HTTP client for one catalog service.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: reqwest::Client,
    api_url: String,
}

/// A store record as returned by the service.
///
/// Only `nombre` is guaranteed; the placeholder columns are accepted but
/// carry no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteItem {
    #[serde(default)]
    pub id: Option<DbId>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub imagen: Option<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    #[serde(default)]
    pub db: Option<String>,
    #[serde(default)]
    pub tables: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Created {
    id: DbId,
}

#[derive(Serialize)]
struct NombreBody<'a> {
    nombre: &'a str,
}

/// Errors from the catalog REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl CatalogApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base URL including the `/api` prefix, e.g.
    ///   `http://localhost:3000/api`. A trailing slash is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /api/health`.
    pub async fn health(&self) -> Result<HealthStatus, CatalogApiError> {
        let response = self
            .client
            .get(format!("{}/health", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/{category}`.
    pub async fn list(&self, category: Category) -> Result<Vec<RemoteItem>, CatalogApiError> {
        let response = self.client.get(self.category_url(category)).send().await?;

        Self::parse_response(response).await
    }

    /// `GET /api/{category}/buscar?q=`.
    ///
    /// The query is sent as-is; the service trims it and answers `[]` for a
    /// blank one.
    pub async fn search(
        &self,
        category: Category,
        query: &str,
    ) -> Result<Vec<RemoteItem>, CatalogApiError> {
        let response = self
            .client
            .get(format!("{}/buscar", self.category_url(category)))
            .query(&[("q", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/{category}/{id}`. A 404 comes back as `Ok(None)`.
    pub async fn get(
        &self,
        category: Category,
        id: DbId,
    ) -> Result<Option<RemoteItem>, CatalogApiError> {
        let response = self
            .client
            .get(format!("{}/{id}", self.category_url(category)))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse_response(response).await.map(Some)
    }

    /// `POST /api/{category}`. Returns the new record's id.
    pub async fn create(&self, category: Category, nombre: &str) -> Result<DbId, CatalogApiError> {
        let response = self
            .client
            .post(self.category_url(category))
            .json(&NombreBody { nombre })
            .send()
            .await?;

        let created: Created = Self::parse_response(response).await?;
        Ok(created.id)
    }

    /// `PUT /api/{category}/{id}`.
    pub async fn update(
        &self,
        category: Category,
        id: DbId,
        nombre: &str,
    ) -> Result<(), CatalogApiError> {
        let response = self
            .client
            .put(format!("{}/{id}", self.category_url(category)))
            .json(&NombreBody { nombre })
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `DELETE /api/{category}/{id}`.
    pub async fn delete(&self, category: Category, id: DbId) -> Result<(), CatalogApiError> {
        let response = self
            .client
            .delete(format!("{}/{id}", self.category_url(category)))
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn category_url(&self, category: Category) -> String {
        format!("{}/{}", self.api_url, category.as_str())
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), CatalogApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let api = CatalogApi::new("http://localhost:3000/api/");
        assert_eq!(api.api_url(), "http://localhost:3000/api");
        assert_eq!(
            api.category_url(Category::Lacteos),
            "http://localhost:3000/api/lacteos"
        );
    }

    #[test]
    fn remote_item_accepts_minimal_and_full_rows() {
        let minimal: RemoteItem = serde_json::from_str(r#"{"nombre":"Crema 500ml"}"#).unwrap();
        assert_eq!(minimal.id, None);
        assert_eq!(minimal.nombre, "Crema 500ml");

        let full: RemoteItem = serde_json::from_str(
            r#"{"id":9,"nombre":"Crema 500ml","descripcion":"","precio":null,"imagen":""}"#,
        )
        .unwrap();
        assert_eq!(full.id, Some(9));
        assert_eq!(full.precio, None);
    }
}
