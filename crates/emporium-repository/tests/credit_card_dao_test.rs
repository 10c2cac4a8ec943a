//! Integration tests for MySqlCreditCardDao.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::NaiveDate;
use common::TestDatabase;
use emporium_core::{CreditCard, Customer, CustomerId, Email, EmporiumError, Gender};
use emporium_repository::{CreditCardDao, CustomerDao, MySqlCreditCardDao, MySqlCustomerDao};

async fn seed_customer(db: &TestDatabase, email: &str) -> CustomerId {
    let dao = MySqlCustomerDao::new(db.pool());
    let customer = dao
        .create(&Customer::new(
            "Test".to_string(),
            "Customer".to_string(),
            Gender::Female,
            NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
            Email::new_unchecked(email),
        ))
        .await
        .expect("Failed to seed customer");
    customer.id.unwrap()
}

fn create_test_card() -> CreditCard {
    CreditCard::new(
        "Test Customer".to_string(),
        "4111111111111111".to_string(),
        "04/2030".to_string(),
        "123".to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find_by_customer_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlCreditCardDao::new(db.pool());
    let customer_id = seed_customer(&db, "owner@example.com").await;

    dao.create(&create_test_card(), customer_id)
        .await
        .expect("Failed to create credit card");

    let found = dao
        .find_by_customer_id(customer_id)
        .await
        .expect("Query failed")
        .expect("Credit card not found");

    assert_eq!(found.holder_name, "Test Customer");
    assert_eq!(found.card_number, "4111111111111111");
    assert_eq!(found.exp_date, "04/2030");
    assert_eq!(found.security_code, "123");
}

#[tokio::test]
async fn test_create_second_card_is_conflict() {
    let db = TestDatabase::new().await;
    let dao = MySqlCreditCardDao::new(db.pool());
    let customer_id = seed_customer(&db, "owner@example.com").await;

    dao.create(&create_test_card(), customer_id)
        .await
        .expect("Failed to create credit card");

    let err = dao
        .create(&create_test_card(), customer_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EmporiumError::Conflict(_)));
}

#[tokio::test]
async fn test_find_by_customer_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlCreditCardDao::new(db.pool());
    let customer_id = seed_customer(&db, "owner@example.com").await;

    let result = dao
        .find_by_customer_id(customer_id)
        .await
        .expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_by_customer_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlCreditCardDao::new(db.pool());
    let customer_id = seed_customer(&db, "owner@example.com").await;

    dao.create(&create_test_card(), customer_id)
        .await
        .expect("Failed to create credit card");

    assert!(dao
        .delete_by_customer_id(customer_id)
        .await
        .expect("Failed to delete"));
    assert!(dao
        .find_by_customer_id(customer_id)
        .await
        .expect("Query failed")
        .is_none());
    assert!(!dao
        .delete_by_customer_id(customer_id)
        .await
        .expect("Failed to delete"));
}
