//! ProductDao trait — low-level product data access abstraction.

use async_trait::async_trait;
use emporium_core::{EmporiumResult, Interface, Product, ProductId};

/// Low-level product data access object.
#[async_trait]
pub trait ProductDao: Interface + Send + Sync {
    /// Persists a new product and returns it with its generated key.
    ///
    /// The product's id must be `None`; a preassigned key is a validation
    /// error.
    async fn create(&self, product: &Product) -> EmporiumResult<Product>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> EmporiumResult<Option<Product>>;

    /// Finds a product by its unique UPC.
    async fn find_by_upc(&self, upc: &str) -> EmporiumResult<Option<Product>>;

    /// Finds all products in a category.
    async fn find_by_category(&self, category: i32) -> EmporiumResult<Vec<Product>>;

    /// Updates an existing product. The product's id must be set.
    async fn update(&self, product: &Product) -> EmporiumResult<Product>;

    /// Deletes a product by ID. Returns `true` if deleted.
    async fn delete(&self, id: ProductId) -> EmporiumResult<bool>;
}
