//! AddressDao trait — low-level address data access abstraction.
//!
//! An address is owned 1:1 by a customer, so every operation is keyed by the
//! owning customer's id rather than a key of its own.

use async_trait::async_trait;
use emporium_core::{Address, CustomerId, EmporiumResult, Interface};

/// Low-level address data access object.
#[async_trait]
pub trait AddressDao: Interface + Send + Sync {
    /// Persists the address for the given customer.
    ///
    /// Inserting a second address for the same customer is a conflict.
    async fn create(&self, address: &Address, customer_id: CustomerId)
        -> EmporiumResult<Address>;

    /// Finds the address owned by the given customer.
    async fn find_by_customer_id(&self, customer_id: CustomerId)
        -> EmporiumResult<Option<Address>>;

    /// Deletes the address owned by the given customer. Returns `true` if a
    /// row was deleted.
    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> EmporiumResult<bool>;
}
