use std::sync::Arc;

use catalog_core::DomainResult;
use catalog_infra::{InMemoryProductStore, ProductStore};

use crate::config::ApiConfig;

/// Shared handles the HTTP handlers dispatch into.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// In-memory wiring (the only store backend), optionally preloaded with the
    /// demo catalog.
    pub fn in_memory(seed_demo_data: bool) -> DomainResult<Self> {
        let store = if seed_demo_data {
            let store = InMemoryProductStore::seeded()?;
            tracing::info!("product store seeded with demo catalog");
            store
        } else {
            InMemoryProductStore::new()
        };
        Ok(Self::new(Arc::new(store)))
    }

    pub fn from_config(config: &ApiConfig) -> DomainResult<Self> {
        Self::in_memory(config.seed_demo_data)
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }
}
