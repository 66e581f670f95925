//! Catalog store abstraction
//!
//! Defines the CatalogStore trait the import handler delegates persistence to,
//! along with the failures a store may report:
//! - CatalogServiceError: a catalog-service failure carrying a FailureReason
//! - StoreError: everything a store call can fail with
//!
//! InMemoryCatalogStore is a non-persistent implementation.

use crate::auth::Session;
use crate::models::MondrianCatalog;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub mod memory;

/// Why the catalog service rejected a catalog
///
/// New reasons may appear in later service versions; they deserialize to
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FailureReason {
    General,
    AccessDenied,
    AlreadyExists,
    XmlaSchemaNameExists,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureReason::General => "GENERAL",
            FailureReason::AccessDenied => "ACCESS_DENIED",
            FailureReason::AlreadyExists => "ALREADY_EXISTS",
            FailureReason::XmlaSchemaNameExists => "XMLA_SCHEMA_NAME_EXISTS",
            FailureReason::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Failure reported by the catalog service itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CatalogServiceError {
    pub reason: FailureReason,
    pub message: String,
}

impl CatalogServiceError {
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Error type for catalog store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    CatalogService(#[from] CatalogServiceError),
    #[error("{0}")]
    MalformedSchema(String),
    #[error("{0}")]
    IoError(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Shorthand for a catalog-service failure
    pub fn service(reason: FailureReason, message: impl Into<String>) -> Self {
        StoreError::CatalogService(CatalogServiceError::new(reason, message))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err.to_string())
    }
}

/// Backing service that registers catalogs in the repository
///
/// Implementations own persistence and atomicity; callers hold no state to
/// roll back. Concurrent calls for the same catalog name are the store's
/// concern.
#[async_trait(?Send)]
pub trait CatalogStore: Send + Sync {
    /// Register a catalog, replacing an existing one only if `overwrite` is set
    async fn add_catalog(
        &self,
        catalog: &MondrianCatalog,
        overwrite: bool,
        session: &Session,
    ) -> Result<(), StoreError>;
}

#[async_trait(?Send)]
impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    async fn add_catalog(
        &self,
        catalog: &MondrianCatalog,
        overwrite: bool,
        session: &Session,
    ) -> Result<(), StoreError> {
        (**self).add_catalog(catalog, overwrite, session).await
    }
}

#[async_trait(?Send)]
impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    async fn add_catalog(
        &self,
        catalog: &MondrianCatalog,
        overwrite: bool,
        session: &Session,
    ) -> Result<(), StoreError> {
        (**self).add_catalog(catalog, overwrite, session).await
    }
}
