//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{
    MAX_NAME_LEN, Price, Product, ProductDraft, ProductId, ValidProduct,
};
