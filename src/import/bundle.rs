//! Import bundles
//!
//! A bundle is the read-only request an import handler receives: a name,
//! string properties and the overwrite flag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property holding the catalog identifier (required)
pub const DOMAIN_ID: &str = "domain-id";

/// Property naming the target database connection
pub const DATA_SOURCE: &str = "DataSource";

/// Property switching XMLA publishing on
pub const ENABLE_XMLA: &str = "enableXmla";

/// Read-only view of an import request
pub trait ImportBundle {
    fn name(&self) -> &str;

    /// Value of a string property, `None` if unset
    fn property(&self, name: &str) -> Option<&str>;

    /// Whether an existing repository entry may be replaced
    fn overwrite_in_repository(&self) -> bool;
}

/// Bundle built from in-memory properties
///
/// # Example
///
/// ```rust
/// use mondrian_catalog_import::import::bundle::{ImportBundle, PlatformImportBundle};
///
/// let bundle = PlatformImportBundle::new("Sales")
///     .with_property("domain-id", "Sales")
///     .with_overwrite(true);
///
/// assert_eq!(bundle.property("domain-id"), Some("Sales"));
/// assert!(bundle.overwrite_in_repository());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformImportBundle {
    pub name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub overwrite_in_repository: bool,
}

impl PlatformImportBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite_in_repository = overwrite;
        self
    }
}

impl ImportBundle for PlatformImportBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn overwrite_in_repository(&self) -> bool {
        self.overwrite_in_repository
    }
}
