//! Product repository trait

use async_trait::async_trait;

use super::{Product, ProductId};
use crate::domain::DomainError;

/// Repository trait for Product persistence
#[async_trait]
pub trait ProductRepository: Send + Sync + std::fmt::Debug {
    /// Get a product by ID
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Get all products
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Update an existing product
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Delete a product by ID
    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError>;
}

/// In-memory implementation of ProductRepository
pub mod in_memory {
    use std::collections::HashMap;
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::*;

    /// In-memory implementation of ProductRepository for development and tests
    #[derive(Debug, Default)]
    pub struct InMemoryProductRepository {
        products: Arc<RwLock<HashMap<String, Product>>>,
    }

    impl InMemoryProductRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn get(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
            let products = self.products.read().await;
            Ok(products.get(id.as_str()).cloned())
        }

        async fn list(&self) -> Result<Vec<Product>, DomainError> {
            let products = self.products.read().await;
            let mut all: Vec<Product> = products.values().cloned().collect();
            all.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
            Ok(all)
        }

        async fn create(&self, product: Product) -> Result<Product, DomainError> {
            let mut products = self.products.write().await;
            let id = product.id().as_str().to_string();

            if products.contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "Product '{}' already exists",
                    id
                )));
            }

            products.insert(id, product.clone());
            Ok(product)
        }

        async fn update(&self, product: Product) -> Result<Product, DomainError> {
            let mut products = self.products.write().await;
            let id = product.id().as_str().to_string();

            if !products.contains_key(&id) {
                return Err(DomainError::not_found(format!("Product '{}'", id)));
            }

            products.insert(id, product.clone());
            Ok(product)
        }

        async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
            let mut products = self.products.write().await;
            Ok(products.remove(id.as_str()).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::in_memory::InMemoryProductRepository;
    use super::*;

    fn sample(id: &str) -> Product {
        Product::new(ProductId::new(id).unwrap(), "Parafuso M8", 0.35, 1200)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();

        repo.create(sample("parafuso-m8")).await.unwrap();

        let found = repo
            .get(&ProductId::new("parafuso-m8").unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().name(), "Parafuso M8");
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = InMemoryProductRepository::new();

        repo.create(sample("parafuso-m8")).await.unwrap();
        let result = repo.create(sample("parafuso-m8")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_id() {
        let repo = InMemoryProductRepository::new();

        repo.create(sample("zeta")).await.unwrap();
        repo.create(sample("alfa")).await.unwrap();

        let all = repo.list().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["alfa", "zeta"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(sample("parafuso-m8")).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryProductRepository::new();
        let id = ProductId::new("parafuso-m8").unwrap();

        repo.create(sample("parafuso-m8")).await.unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.get(&id).await.unwrap().is_none());
    }
}
