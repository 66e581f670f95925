//! Mondrian catalog import
//!
//! Registers a Mondrian catalog uploaded by schema publishing clients. The
//! bundle names the catalog through its `domain-id` property; the handler
//! builds the catalog descriptor, hands it to the catalog store and turns the
//! store's failures into publish status codes.

use super::bundle::{DATA_SOURCE, DOMAIN_ID, ENABLE_XMLA, ImportBundle};
use super::{ImportError, ImportErrorKind, ImportHandler};
use crate::auth::Session;
use crate::config::ImportConfig;
use crate::models::{AuthMode, MondrianCatalog, MondrianDataSource, MondrianSchema, ProviderType};
use crate::storage::{CatalogStore, FailureReason, StoreError};
use async_trait::async_trait;
use tracing::{Level, debug, info, warn};

/// The only `enableXmla` value that turns XMLA on.
///
/// Matched exactly and case-sensitively: `"true"` or `"TRUE"` leave XMLA off.
pub const XMLA_ENABLED_VALUE: &str = "True";

const PROVIDER_NAME: &str = "Provider=Mondrian";

/// Whether an `enableXmla` property value enables XMLA
pub fn is_xmla_enabled(value: Option<&str>) -> bool {
    value == Some(XMLA_ENABLED_VALUE)
}

/// Map a catalog service failure reason to an import error kind
///
/// Reasons without an explicit mapping, including ones added by later
/// service versions, report `ServerPublishFailed`.
pub(crate) fn classify_failure(reason: FailureReason) -> ImportErrorKind {
    match reason {
        FailureReason::General => ImportErrorKind::GeneralError,
        FailureReason::AlreadyExists => ImportErrorKind::SchemaExistsError,
        _ => ImportErrorKind::ServerPublishFailed,
    }
}

fn translate_store_error(err: StoreError) -> ImportError {
    match err {
        StoreError::CatalogService(e) => {
            let kind = classify_failure(e.reason);
            warn!(
                "Catalog service rejected catalog ({}), reporting {} [status={}]",
                e.reason,
                kind,
                kind.status().code()
            );
            ImportError::new(kind, e.message.clone()).with_source(StoreError::CatalogService(e))
        }
        other => {
            warn!("Catalog import failed: {}", other);
            ImportError::new(ImportErrorKind::GenericImportError, other.to_string())
                .with_source(other)
        }
    }
}

/// Import handler for Mondrian schemas
pub struct MondrianImportHandler<S: CatalogStore> {
    store: S,
    config: ImportConfig,
}

impl<S: CatalogStore> MondrianImportHandler<S> {
    /// Create a handler with the default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, ImportConfig::default())
    }

    pub fn with_config(store: S, config: ImportConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Build the catalog descriptor for a domain id
    ///
    /// A missing data source name is passed through as an empty string.
    pub(crate) fn create_catalog(
        &self,
        domain_id: &str,
        data_source: Option<&str>,
        xmla_enabled: bool,
    ) -> MondrianCatalog {
        let name = domain_id.to_string();
        let data_source = data_source.unwrap_or_default();

        let ds = MondrianDataSource {
            name: name.clone(),
            description: String::new(),
            url: String::new(),
            data_source_info: format!("Provider=mondrian;DataSource={}", data_source),
            provider_name: PROVIDER_NAME.to_string(),
            provider_type: ProviderType::for_xmla(xmla_enabled),
            auth_mode: AuthMode::Unauthenticated,
            catalogs: None,
        };

        MondrianCatalog {
            data_source_info: format!("Provider=mondrian;DataSource={};", data_source),
            definition: format!(
                "mondrian:{}{}",
                self.config.repository_separator(),
                name
            ),
            data_source: ds,
            schema: MondrianSchema::reference(name.clone()),
            name,
        }
    }
}

#[async_trait(?Send)]
impl<S: CatalogStore> ImportHandler for MondrianImportHandler<S> {
    async fn import_file(
        &self,
        bundle: &dyn ImportBundle,
        session: &Session,
    ) -> Result<(), ImportError> {
        let overwrite = bundle.overwrite_in_repository();
        let xmla_enabled = is_xmla_enabled(bundle.property(ENABLE_XMLA));
        debug!(
            "Importing Mondrian catalog [bundle={}, overwrite={}]",
            bundle.name(),
            overwrite
        );

        let domain_id = match bundle.property(DOMAIN_ID) {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ImportError::missing_required_field(DOMAIN_ID)),
        };

        let catalog = self.create_catalog(domain_id, bundle.property(DATA_SOURCE), xmla_enabled);
        if tracing::enabled!(Level::DEBUG) {
            match catalog.to_json() {
                Ok(json) => debug!("Catalog descriptor for '{}':\n{}", catalog.name, json),
                Err(e) => debug!("Could not render catalog descriptor: {}", e),
            }
        }
        self.store
            .add_catalog(&catalog, overwrite, session)
            .await
            .map_err(translate_store_error)?;

        info!(
            "Imported Mondrian catalog '{}' to {}",
            catalog.name, catalog.definition
        );
        Ok(())
    }
}
