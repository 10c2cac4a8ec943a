//! MySQL DAO implementations backed by SQLx.

mod address_dao;
mod credit_card_dao;
mod customer_dao;
mod product_dao;
mod purchase_dao;

pub use address_dao::MySqlAddressDao;
pub use credit_card_dao::MySqlCreditCardDao;
pub use customer_dao::MySqlCustomerDao;
pub use product_dao::MySqlProductDao;
pub use purchase_dao::MySqlPurchaseDao;
