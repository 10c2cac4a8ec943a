//! MySQL address DAO implementation.

use crate::{dao::AddressDao, pool::DatabasePoolInterface};
use async_trait::async_trait;
use emporium_core::{Address, CustomerId, EmporiumError, EmporiumResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL address DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = AddressDao)]
pub struct MySqlAddressDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlAddressDao {
    /// Creates a new MySQL address DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an address.
#[derive(Debug, FromRow)]
struct AddressRow {
    line1: String,
    line2: Option<String>,
    city: String,
    state: String,
    zip_code: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            line1: row.line1,
            line2: row.line2,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
        }
    }
}

#[async_trait]
impl AddressDao for MySqlAddressDao {
    async fn create(
        &self,
        address: &Address,
        customer_id: CustomerId,
    ) -> EmporiumResult<Address> {
        debug!("Inserting address for customer: {}", customer_id);

        // The customer id is the row's primary key; a second insert for the
        // same customer surfaces as a duplicate-key conflict.
        sqlx::query(
            r#"
            INSERT INTO address (customer_id, line1, line2, city, state, zip_code)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer_id.into_inner())
        .bind(&address.line1)
        .bind(&address.line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .execute(self.pool.inner())
        .await?;

        self.find_by_customer_id(customer_id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch inserted address"))
    }

    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> EmporiumResult<Option<Address>> {
        debug!("Finding address for customer: {}", customer_id);

        let row = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT line1, line2, city, state, zip_code
            FROM address
            WHERE customer_id = ?
            "#,
        )
        .bind(customer_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Address::from))
    }

    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> EmporiumResult<bool> {
        debug!("Deleting address for customer: {}", customer_id);

        let result = sqlx::query("DELETE FROM address WHERE customer_id = ?")
            .bind(customer_id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlAddressDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAddressDao").finish_non_exhaustive()
    }
}
