//! Purchase entity.

use crate::{CustomerId, ProductId, PurchaseId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single purchase of a product by a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Database-generated key; `None` before insert.
    pub id: Option<PurchaseId>,
    /// Purchasing customer.
    pub customer_id: CustomerId,
    /// Purchased product.
    pub product_id: ProductId,
    pub purchase_date: NaiveDate,
    pub amount: f64,
}

impl Purchase {
    /// Creates a new purchase that has not been persisted yet.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        product_id: ProductId,
        purchase_date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            product_id,
            purchase_date,
            amount,
        }
    }
}
