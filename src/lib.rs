//! Mondrian catalog import
//!
//! Registers a Mondrian catalog (a schema reference paired with a data source
//! connection) in a repository from an uploaded import bundle:
//! - Import handler and publish status codes
//! - Catalog descriptor models
//! - Catalog store abstraction (with an in-memory store)
//! - Caller session context
//! - Configuration

pub mod auth;
pub mod config;
pub mod import;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use auth::Session;
pub use config::{ConfigError, ImportConfig};
pub use import::bundle::{ImportBundle, PlatformImportBundle};
pub use import::{ImportError, ImportErrorKind, ImportHandler, MondrianImportHandler, PublishStatus};
pub use models::{AuthMode, MondrianCatalog, MondrianDataSource, MondrianSchema, ProviderType};
pub use storage::memory::InMemoryCatalogStore;
pub use storage::{CatalogServiceError, CatalogStore, FailureReason, StoreError};
