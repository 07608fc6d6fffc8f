//! Infrastructure services

mod product_service;

pub use product_service::{CreateProductRequest, ProductService, UpdateProductRequest};
