use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainError, DomainResult};
use catalog_products::{Product, ProductDraft, ProductId};

use crate::seed;
use crate::store::ProductStore;

/// Live table plus the next id to hand out.
///
/// Both live behind the same lock so that id assignment and insertion are one
/// step, and `next_id` only ever moves forward (deleted ids are never reused).
#[derive(Debug)]
struct Catalog {
    next_id: ProductId,
    products: BTreeMap<ProductId, Product>,
}

/// In-memory product store guarded by a single reader/writer lock.
///
/// Mutations take the write lock; `list`/`get` share the read lock and clone
/// their result before releasing it.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Catalog>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog {
                next_id: ProductId::FIRST,
                products: BTreeMap::new(),
            }),
        }
    }

    /// Store preloaded with the demo catalog.
    pub fn seeded() -> DomainResult<Self> {
        let store = Self::new();
        store.seed(seed::demo_products())?;
        Ok(store)
    }

    /// Create each draft through the regular create path.
    ///
    /// Seed data is expected to be valid; a rejected draft is reported as an
    /// invariant violation rather than a client error.
    pub fn seed(&self, drafts: impl IntoIterator<Item = ProductDraft>) -> DomainResult<Vec<Product>> {
        drafts
            .into_iter()
            .map(|draft| {
                self.create(draft).map_err(|e| match e {
                    DomainError::Validation(msg) => {
                        DomainError::invariant(format!("invalid seed product: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Catalog>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Catalog>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    tracing::error!("product store lock poisoned");
    DomainError::invariant("product store lock poisoned")
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> DomainResult<Vec<Product>> {
        let catalog = self.read()?;
        Ok(catalog.products.values().cloned().collect())
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        let catalog = self.read()?;
        catalog.products.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        // Validation needs no shared state; do it before taking the lock.
        let fields = draft.validate()?;

        let mut catalog = self.write()?;
        let id = catalog.next_id;
        catalog.next_id = id.next().ok_or_else(|| {
            tracing::error!("product id space exhausted");
            DomainError::invariant("product id space exhausted")
        })?;

        let product = Product::new(id, fields);
        if catalog.products.insert(id, product.clone()).is_some() {
            tracing::error!(product_id = %id, "assigned id was already live");
            return Err(DomainError::invariant(format!("product id {id} assigned twice")));
        }

        tracing::debug!(product_id = %id, "product created");
        Ok(product)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let mut catalog = self.write()?;
        let product = catalog.products.get_mut(&id).ok_or(DomainError::NotFound)?;

        let fields = draft.validate()?;
        product.replace(fields);

        tracing::debug!(product_id = %id, "product updated");
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut catalog = self.write()?;
        match catalog.products.remove(&id) {
            Some(_) => {
                tracing::debug!(product_id = %id, "product deleted");
                Ok(())
            }
            None => Err(DomainError::NotFound),
        }
    }
}
