//! Authoritative product storage.

pub mod in_memory;

pub use in_memory::InMemoryProductStore;

use std::sync::Arc;

use catalog_core::DomainResult;
use catalog_products::{Product, ProductDraft, ProductId};

/// CRUD surface over the canonical product collection.
///
/// Implementations own the collection; every method returns clones so callers
/// can never reach into stored state.
pub trait ProductStore: Send + Sync {
    /// All live products, ascending by id.
    fn list(&self) -> DomainResult<Vec<Product>>;

    fn get(&self, id: ProductId) -> DomainResult<Product>;

    /// Validate the draft, assign a fresh id and store it.
    fn create(&self, draft: ProductDraft) -> DomainResult<Product>;

    /// Replace the fields of a live product. Existence is checked before the
    /// draft is validated.
    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product>;

    /// Remove a live product. A second delete of the same id is `NotFound`.
    fn delete(&self, id: ProductId) -> DomainResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<Product>> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        (**self).create(draft)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }
}
