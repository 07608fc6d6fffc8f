//! Product entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_product_id, ProductValidationError};

/// Product identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ProductId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ProductValidationError> {
        let id = id.into();
        validate_product_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product entity - one inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product
    id: ProductId,

    /// Display name
    name: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Unit price, non-negative
    price: f64,

    /// Units in stock
    quantity: i64,

    /// Creation timestamp
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new Product with required fields
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style method to set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators (for service layer updates)

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.touch();
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
