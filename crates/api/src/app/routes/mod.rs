use axum::Router;

use crate::app::dto::PRODUCTS_PATH;

pub mod products;
pub mod system;

/// Router for the resource endpoints.
pub fn router() -> Router {
    Router::new().nest(PRODUCTS_PATH, products::router())
}
