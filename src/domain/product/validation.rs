//! Product validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for product IDs
pub const MAX_PRODUCT_ID_LENGTH: usize = 50;

/// Regex pattern for valid product IDs (alphanumeric + hyphens)
static PRODUCT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap());

/// Product validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    /// Product ID is empty
    EmptyId,
    /// Product ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Product ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Product name is empty
    EmptyName,
    /// Price is negative
    NegativePrice { value: f64 },
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Product ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Product ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid product ID format '{}': must be alphanumeric with hyphens, cannot start or end with hyphen",
                    id
                )
            }
            Self::EmptyName => write!(f, "Product name cannot be empty"),
            Self::NegativePrice { value } => {
                write!(f, "Invalid price {}: must not be negative", value)
            }
        }
    }
}

impl std::error::Error for ProductValidationError {}

/// Validate a product ID
pub fn validate_product_id(id: &str) -> Result<(), ProductValidationError> {
    if id.is_empty() {
        return Err(ProductValidationError::EmptyId);
    }

    if id.len() > MAX_PRODUCT_ID_LENGTH {
        return Err(ProductValidationError::IdTooLong {
            length: id.len(),
            max: MAX_PRODUCT_ID_LENGTH,
        });
    }

    if !PRODUCT_ID_PATTERN.is_match(id) {
        return Err(ProductValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), ProductValidationError> {
    if name.trim().is_empty() {
        return Err(ProductValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a product price
pub fn validate_price(price: f64) -> Result<(), ProductValidationError> {
    if price < 0.0 {
        return Err(ProductValidationError::NegativePrice { value: price });
    }

    Ok(())
}
