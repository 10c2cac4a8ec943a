//! MySQL product DAO implementation.

use crate::{dao::ProductDao, pool::DatabasePoolInterface};
use async_trait::async_trait;
use emporium_core::{EmporiumError, EmporiumResult, Product, ProductId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductDao)]
pub struct MySqlProductDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductDao {
    /// Creates a new MySQL product DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    category: i32,
    upc: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: Some(ProductId::from_i64(row.id)),
            name: row.name,
            description: row.description,
            category: row.category,
            upc: row.upc,
        }
    }
}

#[async_trait]
impl ProductDao for MySqlProductDao {
    async fn create(&self, product: &Product) -> EmporiumResult<Product> {
        if product.id.is_some() {
            return Err(EmporiumError::validation(
                "cannot insert a product that already has an id",
            ));
        }

        debug!("Inserting product with UPC: {}", product.upc);

        let result = sqlx::query(
            "INSERT INTO product (name, description, category, upc) VALUES (?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.category)
        .bind(&product.upc)
        .execute(self.pool.inner())
        .await?;

        // MySQL doesn't support RETURNING, so read the generated key and select
        let id = ProductId::from_i64(result.last_insert_id() as i64);
        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch inserted product"))
    }

    async fn find_by_id(&self, id: ProductId) -> EmporiumResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, category, upc
            FROM product
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_by_upc(&self, upc: &str) -> EmporiumResult<Option<Product>> {
        debug!("Finding product by UPC: {}", upc);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, category, upc
            FROM product
            WHERE upc = ?
            "#,
        )
        .bind(upc)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_by_category(&self, category: i32) -> EmporiumResult<Vec<Product>> {
        debug!("Finding products by category: {}", category);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, category, upc
            FROM product
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> EmporiumResult<Product> {
        let id = product
            .id
            .ok_or_else(|| EmporiumError::validation("cannot update a product without an id"))?;

        debug!("Updating product: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE product
            SET name = ?, description = ?, category = ?, upc = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.category)
        .bind(&product.upc)
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(EmporiumError::not_found("product", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch updated product"))
    }

    async fn delete(&self, id: ProductId) -> EmporiumResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlProductDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductDao").finish_non_exhaustive()
    }
}
