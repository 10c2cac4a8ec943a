//! # Emporium Repository
//!
//! Thin SQL-calling data access layer for the e-commerce schema:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn ProductDao>        (DAO interface, one per entity)
//! MySqlProductDao                 (DAO impl — MySQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! Each DAO method executes exactly one hand-written SQL statement against a
//! borrowed pool and maps the result rows field by field. There is no
//! cross-entity coordination, caching, or transaction management here.
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs          ← DatabasePoolInterface + DatabasePool
//!   dao/             ← one trait per entity
//!   mysql/           ← one MySQL implementation per trait
//! ```

pub mod dao;
pub mod mysql;
pub mod pool;

pub use dao::{AddressDao, CreditCardDao, CustomerDao, ProductDao, PurchaseDao};
pub use mysql::{
    MySqlAddressDao, MySqlCreditCardDao, MySqlCustomerDao, MySqlProductDao, MySqlPurchaseDao,
};
pub use pool::*;
