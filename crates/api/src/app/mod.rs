//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring shared by handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    let api = routes::router().layer(Extension(Arc::new(services)));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::app::dto::ProductResponse;
    use crate::app::services::AppServices;

    fn empty_app() -> Router {
        build_app(AppServices::in_memory(false).unwrap())
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = empty_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_sets_location_header() {
        let res = empty_app()
            .oneshot(json_request(
                Method::POST,
                "/api/products",
                serde_json::json!({ "name": "a", "description": "asd", "price": 1 }),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[header::LOCATION], "/api/products/1");
        let body: ProductResponse = body_json(res).await;
        assert_eq!(body.id.get(), 1);
        assert_eq!(body.name, "a");
    }

    #[tokio::test]
    async fn create_location_uses_request_host() {
        let mut req = json_request(
            Method::POST,
            "/api/products",
            serde_json::json!({ "name": "a", "description": "asd", "price": 1 }),
        );
        req.headers_mut()
            .insert(header::HOST, "catalog.test:8080".parse().unwrap());

        let res = empty_app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(
            res.headers()[header::LOCATION],
            "http://catalog.test:8080/api/products/1"
        );
    }

    #[tokio::test]
    async fn array_body_is_bad_request() {
        let res = empty_app()
            .oneshot(json_request(
                Method::POST,
                "/api/products",
                serde_json::json!(["a", "asd", 1]),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = body_json(res).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let res = empty_app()
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: Vec<ProductResponse> = body_json(res).await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let res = empty_app()
            .oneshot(Request::get("/api/products/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = body_json(res).await;
        assert_eq!(body["error"], "invalid_id");
    }

    #[tokio::test]
    async fn body_without_content_type_is_bad_request() {
        let req = Request::post("/api/products")
            .body(Body::from(r#"{"name":"a","description":"asd","price":1}"#))
            .unwrap();
        let res = empty_app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_unknown_id_with_malformed_body_is_not_found() {
        let req = Request::put("/api/products/42")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = empty_app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
