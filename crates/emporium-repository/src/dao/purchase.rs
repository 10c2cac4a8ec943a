//! PurchaseDao trait — low-level purchase data access abstraction.

use async_trait::async_trait;
use emporium_core::{CustomerId, EmporiumResult, Interface, ProductId, Purchase, PurchaseId};

/// Low-level purchase data access object.
#[async_trait]
pub trait PurchaseDao: Interface + Send + Sync {
    /// Persists a new purchase and returns it with its generated key.
    ///
    /// The purchase's id must be `None`; a preassigned key is a validation
    /// error.
    async fn create(&self, purchase: &Purchase) -> EmporiumResult<Purchase>;

    /// Finds a purchase by ID.
    async fn find_by_id(&self, id: PurchaseId) -> EmporiumResult<Option<Purchase>>;

    /// Finds all purchases made by the given customer, most recent first.
    async fn find_by_customer_id(&self, customer_id: CustomerId)
        -> EmporiumResult<Vec<Purchase>>;

    /// Finds all purchases of the given product, most recent first.
    async fn find_by_product_id(&self, product_id: ProductId) -> EmporiumResult<Vec<Purchase>>;

    /// Updates an existing purchase. The purchase's id must be set.
    async fn update(&self, purchase: &Purchase) -> EmporiumResult<Purchase>;

    /// Deletes a purchase by ID. Returns `true` if deleted.
    async fn delete(&self, id: PurchaseId) -> EmporiumResult<bool>;
}
