//! Product service - CRUD operations for the product resource

use std::sync::Arc;

use crate::domain::product::{
    validate_price, validate_product_name, Product, ProductId, ProductRepository,
};
use crate::domain::DomainError;

/// Request to create a new product
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Request to update an existing product
#[derive(Debug, Clone, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Product service for CRUD operations
#[derive(Debug, Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new ProductService with the given repository
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Get a product by ID
    pub async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let product_id = self.parse_product_id(id)?;
        self.repository.get(&product_id).await
    }

    /// Get a product by ID, returning an error if not found
    pub async fn get_required(&self, id: &str) -> Result<Product, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Product '{}' not found", id)))
    }

    /// List all products
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repository.list().await
    }

    /// Create a new product
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, DomainError> {
        let product_id = self.parse_product_id(&request.id)?;

        validate_product_name(&request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_price(request.price).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut product = Product::new(product_id, request.name, request.price, request.quantity);

        if let Some(description) = request.description {
            product = product.with_description(description);
        }

        self.repository.create(product).await
    }

    /// Update an existing product
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        let mut product = self.get_required(id).await?;

        if let Some(name) = request.name {
            validate_product_name(&name).map_err(|e| DomainError::validation(e.to_string()))?;
            product.set_name(name);
        }

        if let Some(description) = request.description {
            product.set_description(Some(description));
        }

        if let Some(price) = request.price {
            validate_price(price).map_err(|e| DomainError::validation(e.to_string()))?;
            product.set_price(price);
        }

        if let Some(quantity) = request.quantity {
            product.set_quantity(quantity);
        }

        self.repository.update(product).await
    }

    /// Delete a product by ID
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let product_id = self.parse_product_id(id)?;
        self.repository.delete(&product_id).await
    }

    fn parse_product_id(&self, id: &str) -> Result<ProductId, DomainError> {
        ProductId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }
}
