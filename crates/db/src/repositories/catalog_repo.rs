//! Repository for the per-category catalog tables (`carnes`, `importados`,
//! `lacteos`).
//!
//! The table name is never bound as a parameter; it comes from
//! [`Category::quoted_table`], which only yields one of three fixed quoted
//! identifiers.

use catalogo_core::category::Category;
use catalogo_core::types::DbId;
use sqlx::PgPool;

use crate::models::catalog_item::{CatalogItem, CatalogRow};

/// Column list for catalog queries.
const CATALOG_COLUMNS: &str = "id, nombre";

/// Maximum number of rows returned by [`CatalogRepo::search`].
pub const MAX_SEARCH_RESULTS: i64 = 200;

/// Provides CRUD and name search over a category table.
pub struct CatalogRepo;

impl CatalogRepo {
    /// List every record in the category, ordered by id.
    pub async fn list(pool: &PgPool, category: Category) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM {} ORDER BY id ASC",
            category.quoted_table()
        );
        let rows = sqlx::query_as::<_, CatalogRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    /// Case- and accent-insensitive substring search on `nombre`.
    ///
    /// `q` is matched literally (LIKE wildcards are escaped). Results are
    /// ordered by id and capped at [`MAX_SEARCH_RESULTS`]. Callers are
    /// expected to short-circuit blank queries before reaching the store.
    pub async fn search(
        pool: &PgPool,
        category: Category,
        q: &str,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(q));
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM {} \
             WHERE lower(unaccent(nombre)) LIKE lower(unaccent($1)) ESCAPE '\\' \
             ORDER BY id ASC \
             LIMIT $2",
            category.quoted_table()
        );
        let rows = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(&pattern)
            .bind(MAX_SEARCH_RESULTS)
            .fetch_all(pool)
            .await?;

        tracing::debug!(%category, q, rows = rows.len(), "Catalog search");

        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    /// Find a record by id.
    pub async fn find_by_id(
        pool: &PgPool,
        category: Category,
        id: DbId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS} FROM {} WHERE id = $1",
            category.quoted_table()
        );
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(CatalogItem::from))
    }

    /// Insert a record, returning its store-assigned id.
    pub async fn create(pool: &PgPool, category: Category, nombre: &str) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (nombre) VALUES ($1) RETURNING id",
            category.quoted_table()
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(nombre)
            .fetch_one(pool)
            .await
    }

    /// Rename a record. Returns the number of rows touched (0 or 1).
    pub async fn update(
        pool: &PgPool,
        category: Category,
        id: DbId,
        nombre: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET nombre = $2 WHERE id = $1",
            category.quoted_table()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(nombre)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a record. Returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, category: Category, id: DbId) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", category.quoted_table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}

/// Escape LIKE metacharacters so `q` matches as a literal substring.
fn escape_like(q: &str) -> String {
    let mut escaped = String::with_capacity(q.len());
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("leche entera"), "leche entera");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\x"), "c:\\\\x");
    }
}
