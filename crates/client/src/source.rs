//! The remote search seam used by [`CategoryView`](crate::view::CategoryView).

use async_trait::async_trait;
use catalogo_core::category::Category;

use crate::api::{CatalogApi, CatalogApiError};

/// Something that can answer "which store names match this query?".
///
/// Implementors report any transport or status failure as an error; the view
/// turns errors into an empty display rather than falling back to local
/// matching.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Names of store records matching `query` in `category`.
    async fn search_names(
        &self,
        category: Category,
        query: &str,
    ) -> Result<Vec<String>, CatalogApiError>;
}

#[async_trait]
impl SearchSource for CatalogApi {
    async fn search_names(
        &self,
        category: Category,
        query: &str,
    ) -> Result<Vec<String>, CatalogApiError> {
        let items = self.search(category, query).await?;
        Ok(items.into_iter().map(|item| item.nombre).collect())
    }
}
