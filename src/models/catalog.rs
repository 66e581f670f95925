//! Catalog descriptor
//!
//! A catalog pairs a schema reference with the data source it queries. The
//! descriptor is built once per import and passed whole to the store.

use super::data_source::MondrianDataSource;
use serde::{Deserialize, Serialize};

/// Named pointer to a Mondrian schema
///
/// `content` stays `None` on import; the store resolves the schema body
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MondrianSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MondrianSchema {
    /// Schema reference with no embedded content
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }
}

/// Catalog registered in the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MondrianCatalog {
    /// Catalog name, equal to the imported domain id
    pub name: String,
    /// Connection string, e.g. `Provider=mondrian;DataSource=SalesDB;`
    pub data_source_info: String,
    /// Repository location, e.g. `mondrian:/Sales`
    pub definition: String,
    pub data_source: MondrianDataSource,
    pub schema: MondrianSchema,
}

impl MondrianCatalog {
    /// Pretty JSON dump of the descriptor, for diagnostics
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
