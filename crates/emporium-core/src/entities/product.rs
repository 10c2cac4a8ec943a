//! Product entity.

use crate::ProductId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Database-generated key; `None` before insert.
    pub id: Option<ProductId>,

    /// Product display name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    /// Short description.
    #[validate(length(max = 255))]
    pub description: String,

    /// Numeric category code.
    pub category: i32,

    /// Universal product code; unique across the catalog.
    #[validate(length(min = 1, max = 12))]
    pub upc: String,
}

impl Product {
    /// Creates a new product that has not been persisted yet.
    #[must_use]
    pub fn new(name: String, description: String, category: i32, upc: String) -> Self {
        Self {
            id: None,
            name,
            description,
            category,
            upc,
        }
    }

    /// Checks if the product has been persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
