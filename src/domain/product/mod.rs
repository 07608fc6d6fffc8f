//! Product domain - the inventory item behind the `/products` subsystem

mod entity;
mod repository;
mod validation;

pub use entity::{Product, ProductId};
pub use repository::{in_memory::InMemoryProductRepository, ProductRepository};
pub use validation::{
    validate_price, validate_product_id, validate_product_name, ProductValidationError,
    MAX_PRODUCT_ID_LENGTH,
};
