//! MySQL credit card DAO implementation.

use crate::{dao::CreditCardDao, pool::DatabasePoolInterface};
use async_trait::async_trait;
use emporium_core::{CreditCard, CustomerId, EmporiumError, EmporiumResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL credit card DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = CreditCardDao)]
pub struct MySqlCreditCardDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCreditCardDao {
    /// Creates a new MySQL credit card DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a credit card.
#[derive(Debug, FromRow)]
struct CreditCardRow {
    holder_name: String,
    card_number: String,
    exp_date: String,
    security_code: String,
}

impl From<CreditCardRow> for CreditCard {
    fn from(row: CreditCardRow) -> Self {
        CreditCard {
            holder_name: row.holder_name,
            card_number: row.card_number,
            exp_date: row.exp_date,
            security_code: row.security_code,
        }
    }
}

#[async_trait]
impl CreditCardDao for MySqlCreditCardDao {
    async fn create(
        &self,
        card: &CreditCard,
        customer_id: CustomerId,
    ) -> EmporiumResult<CreditCard> {
        debug!("Inserting credit card for customer: {}", customer_id);

        sqlx::query(
            r#"
            INSERT INTO credit_card (customer_id, holder_name, card_number, exp_date, security_code)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer_id.into_inner())
        .bind(&card.holder_name)
        .bind(&card.card_number)
        .bind(&card.exp_date)
        .bind(&card.security_code)
        .execute(self.pool.inner())
        .await?;

        self.find_by_customer_id(customer_id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch inserted credit card"))
    }

    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> EmporiumResult<Option<CreditCard>> {
        debug!("Finding credit card for customer: {}", customer_id);

        let row = sqlx::query_as::<_, CreditCardRow>(
            r#"
            SELECT holder_name, card_number, exp_date, security_code
            FROM credit_card
            WHERE customer_id = ?
            "#,
        )
        .bind(customer_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(CreditCard::from))
    }

    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> EmporiumResult<bool> {
        debug!("Deleting credit card for customer: {}", customer_id);

        let result = sqlx::query("DELETE FROM credit_card WHERE customer_id = ?")
            .bind(customer_id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlCreditCardDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCreditCardDao").finish_non_exhaustive()
    }
}
