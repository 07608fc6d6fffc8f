//! Product persistence implementations

mod postgres_repository;

pub use postgres_repository::PostgresProductRepository;
