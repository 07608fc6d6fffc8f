//! Product subsystem - a self-contained route-set mounted under `/products`
//!
//! Owns its own state and error format; the page core only knows the
//! mount prefix.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use crate::infrastructure::services::ProductService;

use super::subsystem::RouteSet;

pub use handlers::{
    CreateProductApiRequest, ListProductsResponse, ProductResponse, UpdateProductApiRequest,
};
pub use types::{ApiError, ApiErrorResponse, ApiErrorType, Json};

/// State local to the product routes
#[derive(Debug, Clone)]
pub struct ProductsState {
    pub service: ProductService,
}

/// The product route-set
pub struct ProductRoutes {
    service: ProductService,
}

impl ProductRoutes {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}

impl RouteSet for ProductRoutes {
    fn prefix(&self) -> &'static str {
        "/products"
    }

    fn routes(&self) -> Router {
        let state = ProductsState {
            service: self.service.clone(),
        };

        Router::new()
            .route(
                "/",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route(
                "/{id}",
                get(handlers::get_product)
                    .put(handlers::update_product)
                    .delete(handlers::delete_product),
            )
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::product::InMemoryProductRepository;

    use super::*;

    fn app() -> Router {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));
        ProductRoutes::new(service).routes()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_body(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Parafuso M8",
            "price": 0.35,
            "quantity": 1200
        })
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/", create_body("parafuso-m8")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["products"][0]["id"], "parafuso-m8");
    }

    #[tokio::test]
    async fn test_duplicate_create_is_conflict() {
        let app = app();

        app.clone()
            .oneshot(json_request("POST", "/", create_body("parafuso-m8")))
            .await
            .unwrap();
        let response = app
            .oneshot(json_request("POST", "/", create_body("parafuso-m8")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "conflict_error");
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nada").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_create_invalid_price_is_400() {
        let body = json!({"id": "caixa-12", "name": "Caixa", "price": -1.0});
        let response = app()
            .oneshot(json_request("POST", "/", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update() {
        let app = app();

        app.clone()
            .oneshot(json_request("POST", "/", create_body("parafuso-m8")))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/parafuso-m8",
                json!({"quantity": 900}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["quantity"], 900);
        assert_eq!(body["name"], "Parafuso M8");
    }

    #[tokio::test]
    async fn test_delete() {
        let app = app();

        app.clone()
            .oneshot(json_request("POST", "/", create_body("parafuso-m8")))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/parafuso-m8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/parafuso-m8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "invalid_request_error");
    }
}
