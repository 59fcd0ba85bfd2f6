//! Product category allowlist.
//!
//! Every route and every store statement is keyed by a [`Category`]. Raw path
//! segments are turned into one with [`Category::parse`], which never touches
//! the store and never panics; anything outside the allowlist comes back as a
//! [`CategoryRejection`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three product groupings backed by a store table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Meats.
    Carnes,
    /// Imported goods.
    Importados,
    /// Dairy.
    Lacteos,
}

/// Rejection returned for a category name outside the allowlist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Tabla no permitida")]
pub struct CategoryRejection {
    /// The raw value that was rejected.
    pub value: String,
}

impl Category {
    /// The full allowlist, in a fixed order.
    pub const ALL: [Category; 3] = [Category::Carnes, Category::Importados, Category::Lacteos];

    /// Validate a raw category name (e.g. a URL path segment).
    ///
    /// Matching is exact: `"Carnes"` or `" carnes"` are rejected, the same as
    /// any other unknown table name.
    pub fn parse(value: &str) -> Result<Self, CategoryRejection> {
        match value {
            "carnes" => Ok(Category::Carnes),
            "importados" => Ok(Category::Importados),
            "lacteos" => Ok(Category::Lacteos),
            other => Err(CategoryRejection {
                value: other.to_string(),
            }),
        }
    }

    /// Wire name, also the store table name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Carnes => "carnes",
            Category::Importados => "importados",
            Category::Lacteos => "lacteos",
        }
    }

    /// Table identifier quoted for interpolation into SQL text.
    ///
    /// Only ever built from the enum, never from caller input.
    pub fn quoted_table(self) -> &'static str {
        match self {
            Category::Carnes => "\"carnes\"",
            Category::Importados => "\"importados\"",
            Category::Lacteos => "\"lacteos\"",
        }
    }

    /// Human-facing title used by the front end.
    pub fn title(self) -> &'static str {
        match self {
            Category::Carnes => "Carnes",
            Category::Importados => "Importados",
            Category::Lacteos => "Lácteos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_allowlisted_name() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for raw in ["usuarios", "", "Carnes", " lacteos", "carnes;drop", "`carnes`"] {
            let err = Category::parse(raw).unwrap_err();
            assert_eq!(err.value, raw);
            assert_eq!(err.to_string(), "Tabla no permitida");
        }
    }

    #[test]
    fn quoted_table_wraps_the_table_name() {
        for category in Category::ALL {
            assert_eq!(
                category.quoted_table(),
                format!("\"{}\"", category.as_str())
            );
        }
    }

    #[test]
    fn serde_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&Category::ALL).unwrap();
        assert_eq!(json, r#"["carnes","importados","lacteos"]"#);

        let parsed: Category = serde_json::from_str(r#""importados""#).unwrap();
        assert_eq!(parsed, Category::Importados);
    }

    #[test]
    fn from_str_delegates_to_parse() {
        assert_eq!("lacteos".parse::<Category>(), Ok(Category::Lacteos));
        assert!("quesos".parse::<Category>().is_err());
    }
}
