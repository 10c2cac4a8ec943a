//! MySQL customer DAO implementation.

use crate::{dao::CustomerDao, pool::DatabasePoolInterface};
use async_trait::async_trait;
use chrono::NaiveDate;
use emporium_core::{Customer, CustomerId, Email, EmporiumError, EmporiumResult, Gender};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL customer DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = CustomerDao)]
pub struct MySqlCustomerDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCustomerDao {
    /// Creates a new MySQL customer DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a customer.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    gender: String, // CHAR(1)
    date_of_birth: NaiveDate,
    email: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = EmporiumError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let gender = Gender::from_code(&row.gender).ok_or_else(|| {
            EmporiumError::Internal(format!("Invalid gender code in database: {}", row.gender))
        })?;

        Ok(Customer {
            id: Some(CustomerId::from_i64(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            gender,
            date_of_birth: row.date_of_birth,
            email: Email::new_unchecked(row.email),
        })
    }
}

#[async_trait]
impl CustomerDao for MySqlCustomerDao {
    async fn create(&self, customer: &Customer) -> EmporiumResult<Customer> {
        if customer.id.is_some() {
            return Err(EmporiumError::validation(
                "cannot insert a customer that already has an id",
            ));
        }

        debug!("Inserting customer: {}", customer.email);

        let result = sqlx::query(
            r#"
            INSERT INTO customer (first_name, last_name, gender, date_of_birth, email)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.gender.to_string())
        .bind(customer.date_of_birth)
        .bind(customer.email.as_str())
        .execute(self.pool.inner())
        .await?;

        // MySQL doesn't support RETURNING, so read the generated key and select
        let id = CustomerId::from_i64(result.last_insert_id() as i64);
        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch inserted customer"))
    }

    async fn find_by_id(&self, id: CustomerId) -> EmporiumResult<Option<Customer>> {
        debug!("Finding customer by id: {}", id);

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, gender, date_of_birth, email
            FROM customer
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_by_zip_code(&self, zip_code: &str) -> EmporiumResult<Vec<Customer>> {
        debug!("Finding customers by zip code: {}", zip_code);

        // The zip code lives on the customer's owned address row.
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.gender, c.date_of_birth, c.email
            FROM customer c
            JOIN address a ON a.customer_id = c.id
            WHERE a.zip_code = ?
            ORDER BY c.last_name, c.first_name
            "#,
        )
        .bind(zip_code)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn update(&self, customer: &Customer) -> EmporiumResult<Customer> {
        let id = customer
            .id
            .ok_or_else(|| EmporiumError::validation("cannot update a customer without an id"))?;

        debug!("Updating customer: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE customer
            SET first_name = ?, last_name = ?, gender = ?, date_of_birth = ?, email = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.gender.to_string())
        .bind(customer.date_of_birth)
        .bind(customer.email.as_str())
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(EmporiumError::not_found("customer", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| EmporiumError::internal("Failed to fetch updated customer"))
    }

    async fn delete(&self, id: CustomerId) -> EmporiumResult<bool> {
        debug!("Deleting customer: {}", id);

        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlCustomerDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCustomerDao").finish_non_exhaustive()
    }
}
