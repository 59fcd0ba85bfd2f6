//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /api/{category}/buscar?q=`.
///
/// A missing `q` is treated the same as a blank one.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The trimmed query, or `None` when there is nothing to search for.
    pub fn term(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_queries_have_no_term() {
        assert_eq!(SearchParams { q: None }.term(), None);
        assert_eq!(SearchParams { q: Some(String::new()) }.term(), None);
        assert_eq!(SearchParams { q: Some(" \t\n ".into()) }.term(), None);
    }

    #[test]
    fn term_is_trimmed() {
        let params = SearchParams {
            q: Some("  leche ".into()),
        };
        assert_eq!(params.term(), Some("leche"));
    }
}
