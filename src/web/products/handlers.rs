//! Product CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json as AxumJson;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::product::Product;
use crate::infrastructure::services::{CreateProductRequest, UpdateProductRequest};

use super::types::{ApiError, Json};
use super::ProductsState;

/// Request to create a new product
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductApiRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
}

/// Request to update a product
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Product representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().as_str().to_string(),
            name: product.name().to_string(),
            description: product.description().map(|d| d.to_string()),
            price: product.price(),
            quantity: product.quantity(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}

/// List products response
#[derive(Debug, Clone, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<ProductResponse>,
    pub total: usize,
}

/// `GET /products`
pub async fn list_products(
    State(state): State<ProductsState>,
) -> Result<AxumJson<ListProductsResponse>, ApiError> {
    let products = state.service.list().await?;
    let products: Vec<ProductResponse> = products.iter().map(ProductResponse::from).collect();
    let total = products.len();

    Ok(AxumJson(ListProductsResponse { products, total }))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<ProductsState>,
    Json(request): Json<CreateProductApiRequest>,
) -> Result<(StatusCode, AxumJson<ProductResponse>), ApiError> {
    let product = state
        .service
        .create(CreateProductRequest {
            id: request.id,
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
        })
        .await?;

    info!(product_id = %product.id(), "Product created");

    Ok((StatusCode::CREATED, AxumJson(ProductResponse::from(&product))))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
) -> Result<AxumJson<ProductResponse>, ApiError> {
    let product = state.service.get_required(&id).await?;
    Ok(AxumJson(ProductResponse::from(&product)))
}

/// `PUT /products/{id}`
pub async fn update_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductApiRequest>,
) -> Result<AxumJson<ProductResponse>, ApiError> {
    let product = state
        .service
        .update(
            &id,
            UpdateProductRequest {
                name: request.name,
                description: request.description,
                price: request.price,
                quantity: request.quantity,
            },
        )
        .await?;

    info!(product_id = %product.id(), "Product updated");

    Ok(AxumJson(ProductResponse::from(&product)))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.service.delete(&id).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Product '{}' not found", id)));
    }

    info!(product_id = %id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
