//! CustomerDao trait — low-level customer data access abstraction.

use async_trait::async_trait;
use emporium_core::{Customer, CustomerId, EmporiumResult, Interface};

/// Low-level customer data access object.
#[async_trait]
pub trait CustomerDao: Interface + Send + Sync {
    /// Persists a new customer and returns it with its generated key.
    ///
    /// The customer's id must be `None`; a preassigned key is a validation
    /// error.
    async fn create(&self, customer: &Customer) -> EmporiumResult<Customer>;

    /// Finds a customer by ID.
    async fn find_by_id(&self, id: CustomerId) -> EmporiumResult<Option<Customer>>;

    /// Finds all customers whose address lies in the given zip code.
    async fn find_by_zip_code(&self, zip_code: &str) -> EmporiumResult<Vec<Customer>>;

    /// Updates an existing customer. The customer's id must be set.
    async fn update(&self, customer: &Customer) -> EmporiumResult<Customer>;

    /// Deletes a customer by ID. Returns `true` if deleted.
    async fn delete(&self, id: CustomerId) -> EmporiumResult<bool>;
}
