//! Storage backend selection and startup bootstrap
//!
//! The bootstrap runs once before the listener binds; for postgres it
//! connects the pool and ensures the backing table exists.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::StorageConfig;
use crate::domain::product::{InMemoryProductRepository, ProductRepository};
use crate::domain::DomainError;
use crate::infrastructure::product::PostgresProductRepository;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage (development/tests)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Prepare the product repository for the configured backend.
///
/// Postgres bootstrap failures abort startup; the process never serves
/// against an unprepared store.
pub async fn bootstrap(config: &StorageConfig) -> Result<Arc<dyn ProductRepository>, DomainError> {
    let backend = StorageBackend::from_str(&config.backend).ok_or_else(|| {
        DomainError::configuration(format!("Unknown storage backend '{}'", config.backend))
    })?;

    info!("Storage backend: {:?}", backend);

    match backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryProductRepository::new())),
        StorageBackend::Postgres => {
            let pg = &config.postgres;
            let pool = PgPoolOptions::new()
                .max_connections(pg.max_connections)
                .min_connections(pg.min_connections)
                .acquire_timeout(std::time::Duration::from_secs(pg.connect_timeout_secs))
                .idle_timeout(std::time::Duration::from_secs(pg.idle_timeout_secs))
                .connect(&pg.url)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e))
                })?;

            let repository = PostgresProductRepository::new(pool);
            repository.ensure_table().await?;
            info!("PostgreSQL ready, products table ensured");

            Ok(Arc::new(repository))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!(
            StorageBackend::from_str("memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::from_str("in-memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::from_str("postgres"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(StorageBackend::from_str("pg"), Some(StorageBackend::Postgres));
        assert_eq!(StorageBackend::from_str("unknown"), None);
    }

    #[tokio::test]
    async fn test_bootstrap_memory_backend() {
        let config = StorageConfig::default();
        let repository = bootstrap(&config).await.unwrap();

        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_unknown_backend() {
        let config = StorageConfig {
            backend: "oracle".to_string(),
            ..Default::default()
        };

        let result = bootstrap(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
