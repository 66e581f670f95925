//! Import functionality
//!
//! Provides the handler contract the platform dispatches uploads to, and the
//! Mondrian catalog handler:
//! - bundle: read-only import requests
//! - mondrian: registers a Mondrian catalog with a catalog store

pub mod bundle;
pub mod mondrian;

use crate::auth::Session;
use crate::storage::StoreError;
use async_trait::async_trait;
use bundle::ImportBundle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publish status category reported to callers
///
/// Each category has a stable numeric code shared with publishing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublishStatus {
    GeneralError,
    ServerPublishFailed,
    SchemaExists,
}

impl PublishStatus {
    pub const PUBLISH_GENERAL_ERROR: i32 = -1;
    pub const PUBLISH_TO_SERVER_FAILED: i32 = 7;
    pub const PUBLISH_SCHEMA_EXISTS_ERROR: i32 = 9;

    pub fn code(&self) -> i32 {
        match self {
            PublishStatus::GeneralError => Self::PUBLISH_GENERAL_ERROR,
            PublishStatus::ServerPublishFailed => Self::PUBLISH_TO_SERVER_FAILED,
            PublishStatus::SchemaExists => Self::PUBLISH_SCHEMA_EXISTS_ERROR,
        }
    }
}

/// What went wrong during an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportErrorKind {
    /// A required bundle property was absent
    MissingRequiredField,
    /// The store reported a general failure
    GeneralError,
    /// A schema with the same name is already registered
    SchemaExistsError,
    /// The store refused the catalog for any other reason
    ServerPublishFailed,
    /// Failure that did not come from the catalog service
    GenericImportError,
}

impl ImportErrorKind {
    pub fn status(&self) -> PublishStatus {
        match self {
            ImportErrorKind::SchemaExistsError => PublishStatus::SchemaExists,
            ImportErrorKind::ServerPublishFailed => PublishStatus::ServerPublishFailed,
            ImportErrorKind::MissingRequiredField
            | ImportErrorKind::GeneralError
            | ImportErrorKind::GenericImportError => PublishStatus::GeneralError,
        }
    }
}

impl fmt::Display for ImportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImportErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ImportErrorKind::GeneralError => "GENERAL_ERROR",
            ImportErrorKind::SchemaExistsError => "SCHEMA_EXISTS_ERROR",
            ImportErrorKind::ServerPublishFailed => "SERVER_PUBLISH_FAILED",
            ImportErrorKind::GenericImportError => "GENERIC_IMPORT_ERROR",
        };
        f.write_str(s)
    }
}

/// Error returned by import handlers
///
/// # Example
///
/// ```rust
/// use mondrian_catalog_import::import::{ImportError, ImportErrorKind};
///
/// let err = ImportError::new(ImportErrorKind::SchemaExistsError, "Catalog Sales already exists");
/// assert_eq!(err.status_code(), 9);
/// assert_eq!(err.to_string(), "Catalog Sales already exists");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ImportError {
    kind: ImportErrorKind,
    message: String,
    #[source]
    source: Option<StoreError>,
}

impl ImportError {
    pub fn new(kind: ImportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the store failure this error was translated from
    pub fn with_source(mut self, source: StoreError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn missing_required_field(property: &str) -> Self {
        Self::new(
            ImportErrorKind::MissingRequiredField,
            format!("Bundle missing required {} property", property),
        )
    }

    pub fn kind(&self) -> ImportErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> PublishStatus {
        self.kind.status()
    }

    /// Numeric publish status code
    pub fn status_code(&self) -> i32 {
        self.kind.status().code()
    }
}

/// Handler the platform dispatches an uploaded bundle to
#[async_trait(?Send)]
pub trait ImportHandler {
    /// Import a bundle on behalf of `session`
    async fn import_file(
        &self,
        bundle: &dyn ImportBundle,
        session: &Session,
    ) -> Result<(), ImportError>;
}

// Re-export for convenience
pub use bundle::PlatformImportBundle;
pub use mondrian::MondrianImportHandler;
