//! Domain layer - Core business logic and entities

pub mod auth;
pub mod error;
pub mod flash;
pub mod page;
pub mod product;

pub use auth::{CredentialPair, LoginOutcome};
pub use error::DomainError;
pub use flash::{FlashLevel, FlashMessage};
pub use page::{PageRegistry, PageTemplate, TemplateError};
pub use product::{Product, ProductId, ProductRepository};
