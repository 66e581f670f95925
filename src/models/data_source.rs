//! Data source descriptor attached to a catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider type recorded on a data source
///
/// Serialized as the tag the catalog service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    /// Multidimensional provider, exposed over XMLA
    #[serde(rename = "MDP")]
    Xmla,
    /// Not published over XMLA
    #[serde(rename = "None:")]
    None,
}

impl ProviderType {
    /// Pick the provider type for the given XMLA setting
    pub fn for_xmla(enabled: bool) -> Self {
        if enabled {
            ProviderType::Xmla
        } else {
            ProviderType::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Xmla => "MDP",
            ProviderType::None => "None:",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access mode of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    Unauthenticated,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Unauthenticated => "Unauthenticated",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection details for the database a catalog reads from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MondrianDataSource {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Connection string, e.g. `Provider=mondrian;DataSource=SalesDB`
    pub data_source_info: String,
    pub provider_name: String,
    pub provider_type: ProviderType,
    pub auth_mode: AuthMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<Vec<String>>,
}
