//! Catalog models
//!
//! Descriptors handed to catalog stores when a Mondrian schema is imported.

pub mod catalog;
pub mod data_source;

pub use catalog::{MondrianCatalog, MondrianSchema};
pub use data_source::{AuthMode, MondrianDataSource, ProviderType};
