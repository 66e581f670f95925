//! In-memory catalog store
//!
//! Keeps registered catalogs in a map keyed by catalog name. Nothing is
//! persisted; useful for embedding and tests.

use super::{CatalogStore, FailureReason, StoreError};
use crate::auth::Session;
use crate::models::MondrianCatalog;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Non-persistent catalog store
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    catalogs: RwLock<BTreeMap<String, MondrianCatalog>>,
    require_authentication: bool,
}

impl InMemoryCatalogStore {
    /// Create an empty store accepting any session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects unauthenticated sessions
    pub fn requiring_authentication() -> Self {
        Self {
            catalogs: RwLock::default(),
            require_authentication: true,
        }
    }

    /// Look up a registered catalog by name
    pub fn get(&self, name: &str) -> Option<MondrianCatalog> {
        self.catalogs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Names of all registered catalogs, sorted
    pub fn list_catalogs(&self) -> Vec<String> {
        self.catalogs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.catalogs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait(?Send)]
impl CatalogStore for InMemoryCatalogStore {
    async fn add_catalog(
        &self,
        catalog: &MondrianCatalog,
        overwrite: bool,
        session: &Session,
    ) -> Result<(), StoreError> {
        if self.require_authentication && !session.is_authenticated() {
            return Err(StoreError::service(
                FailureReason::AccessDenied,
                format!("Access denied adding catalog {}", catalog.name),
            ));
        }

        let mut catalogs = self
            .catalogs
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if catalogs.contains_key(&catalog.name) {
            if !overwrite {
                return Err(StoreError::service(
                    FailureReason::AlreadyExists,
                    format!("Catalog {} already exists", catalog.name),
                ));
            }
            debug!("Replacing catalog '{}'", catalog.name);
        }

        catalogs.insert(catalog.name.clone(), catalog.clone());
        info!(
            "Registered catalog '{}' at {}",
            catalog.name, catalog.definition
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthMode, MondrianDataSource, MondrianSchema, ProviderType};

    fn catalog(name: &str) -> MondrianCatalog {
        MondrianCatalog {
            name: name.to_string(),
            data_source_info: "Provider=mondrian;DataSource=db;".to_string(),
            definition: format!("mondrian:/{}", name),
            data_source: MondrianDataSource {
                name: name.to_string(),
                description: String::new(),
                url: String::new(),
                data_source_info: "Provider=mondrian;DataSource=db".to_string(),
                provider_name: "Provider=Mondrian".to_string(),
                provider_type: ProviderType::None,
                auth_mode: AuthMode::Unauthenticated,
                catalogs: None,
            },
            schema: MondrianSchema::reference(name),
        }
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let store = InMemoryCatalogStore::new();
        let session = Session::anonymous();
        store
            .add_catalog(&catalog("Sales"), false, &session)
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Sales"), Some(catalog("Sales")));
        assert_eq!(store.get("HR"), None);
    }

    #[tokio::test]
    async fn test_duplicate_without_overwrite() {
        let store = InMemoryCatalogStore::new();
        let session = Session::anonymous();
        store
            .add_catalog(&catalog("Sales"), false, &session)
            .await
            .unwrap();

        let err = store
            .add_catalog(&catalog("Sales"), false, &session)
            .await
            .unwrap_err();
        match err {
            StoreError::CatalogService(e) => assert_eq!(e.reason, FailureReason::AlreadyExists),
            other => panic!("Expected catalog service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_with_overwrite() {
        let store = InMemoryCatalogStore::new();
        let session = Session::anonymous();
        store
            .add_catalog(&catalog("Sales"), false, &session)
            .await
            .unwrap();

        let mut replacement = catalog("Sales");
        replacement.data_source.provider_type = ProviderType::Xmla;
        store
            .add_catalog(&replacement, true, &session)
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("Sales").unwrap().data_source.provider_type,
            ProviderType::Xmla
        );
    }

    #[tokio::test]
    async fn test_requires_authentication() {
        let store = InMemoryCatalogStore::requiring_authentication();

        let err = store
            .add_catalog(&catalog("Sales"), false, &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::CatalogService(ref e) if e.reason == FailureReason::AccessDenied
        ));
        assert!(store.is_empty());

        store
            .add_catalog(&catalog("Sales"), false, &Session::authenticated("admin"))
            .await
            .unwrap();
        assert_eq!(store.list_catalogs(), vec!["Sales".to_string()]);
    }
}
