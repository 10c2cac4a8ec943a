//! MySQL purchase DAO implementation.

use crate::{dao::PurchaseDao, pool::DatabasePoolInterface};
use async_trait::async_trait;
use chrono::NaiveDate;
use emporium_core::{
    CustomerId, EmporiumError, EmporiumResult, ProductId, Purchase, PurchaseId,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL purchase DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = PurchaseDao)]
pub struct MySqlPurchaseDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlPurchaseDao {
    /// Creates a new MySQL purchase DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a purchase.
#[derive(Debug, FromRow)]
struct PurchaseRow {
    id: i64,
    customer_id: i64,
    product_id: i64,
    purchase_date: NaiveDate,
    amount: f64,
}

impl From<PurchaseRow> for Purchase {
    fn from(row: PurchaseRow) -> Self {
        Purchase {
            id: Some(PurchaseId::from_i64(row.id)),
            customer_id: CustomerId::from_i64(row.customer_id),
            product_id: ProductId::from_i64(row.product_id),
            purchase_date: row.purchase_date,
            amount: row.amount,
        }
    }
}

#[async_trait]
impl PurchaseDao for MySqlPurchaseDao {
    async fn create(&self, purchase: &Purchase) -> EmporiumResult<Purchase> {
        if purchase.id.is_some() {
            return Err(EmporiumError::validation(
                "cannot insert a purchase that already has an id",
            ));
        }

        debug!(
            "Inserting purchase for customer {} and product {}",
            purchase.customer_id, purchase.product_id
        );

        let result = sqlx::query(
            r#"
            INSERT INTO purchase (customer_id, product_id, purchase_date, amount)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(purchase.customer_id.into_inner())
        .bind(purchase.product_id.into_inner())
        .bind(purchase.purchase_date)
        .bind(purchase.amount)
        .execute(self.pool.inner())
        .await?;

        // MySQL doesn't support RETURNING, so read the generated key and select
        let id = PurchaseId::from_i64(result.last_insert_id() as i64);
        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch inserted purchase"))
    }

    async fn find_by_id(&self, id: PurchaseId) -> EmporiumResult<Option<Purchase>> {
        debug!("Finding purchase by id: {}", id);

        let row = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, customer_id, product_id, purchase_date, amount
            FROM purchase
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Purchase::from))
    }

    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> EmporiumResult<Vec<Purchase>> {
        debug!("Finding purchases by customer: {}", customer_id);

        let rows = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, customer_id, product_id, purchase_date, amount
            FROM purchase
            WHERE customer_id = ?
            ORDER BY purchase_date DESC, id DESC
            "#,
        )
        .bind(customer_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Purchase::from).collect())
    }

    async fn find_by_product_id(&self, product_id: ProductId) -> EmporiumResult<Vec<Purchase>> {
        debug!("Finding purchases by product: {}", product_id);

        let rows = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, customer_id, product_id, purchase_date, amount
            FROM purchase
            WHERE product_id = ?
            ORDER BY purchase_date DESC, id DESC
            "#,
        )
        .bind(product_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Purchase::from).collect())
    }

    async fn update(&self, purchase: &Purchase) -> EmporiumResult<Purchase> {
        let id = purchase
            .id
            .ok_or_else(|| EmporiumError::validation("cannot update a purchase without an id"))?;

        debug!("Updating purchase: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE purchase
            SET customer_id = ?, product_id = ?, purchase_date = ?, amount = ?
            WHERE id = ?
            "#,
        )
        .bind(purchase.customer_id.into_inner())
        .bind(purchase.product_id.into_inner())
        .bind(purchase.purchase_date)
        .bind(purchase.amount)
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(EmporiumError::not_found("purchase", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch updated purchase"))
    }

    async fn delete(&self, id: PurchaseId) -> EmporiumResult<bool> {
        debug!("Deleting purchase: {}", id);

        let result = sqlx::query("DELETE FROM purchase WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlPurchaseDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlPurchaseDao").finish_non_exhaustive()
    }
}
