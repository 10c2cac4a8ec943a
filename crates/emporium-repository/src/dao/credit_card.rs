//! CreditCardDao trait — low-level credit card data access abstraction.
//!
//! Like addresses, credit cards are owned 1:1 by a customer and keyed by the
//! owning customer's id.

use async_trait::async_trait;
use emporium_core::{CreditCard, CustomerId, EmporiumResult, Interface};

/// Low-level credit card data access object.
#[async_trait]
pub trait CreditCardDao: Interface + Send + Sync {
    /// Persists the credit card for the given customer.
    ///
    /// Inserting a second card for the same customer is a conflict.
    async fn create(
        &self,
        card: &CreditCard,
        customer_id: CustomerId,
    ) -> EmporiumResult<CreditCard>;

    /// Finds the credit card owned by the given customer.
    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> EmporiumResult<Option<CreditCard>>;

    /// Deletes the credit card owned by the given customer. Returns `true`
    /// if a row was deleted.
    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> EmporiumResult<bool>;
}
