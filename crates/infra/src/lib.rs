//! Infrastructure layer: product storage and seed data.

pub mod seed;
pub mod store;

pub use store::{InMemoryProductStore, ProductStore};
