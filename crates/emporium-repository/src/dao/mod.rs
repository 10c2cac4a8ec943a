//! DAO trait definitions.
//!
//! One data access object per entity. Each implementation targets a single
//! data source and performs single-table operations only; there is no
//! cross-DAO coordination at this layer.

mod address;
mod credit_card;
mod customer;
mod product;
mod purchase;

pub use address::AddressDao;
pub use credit_card::CreditCardDao;
pub use customer::CustomerDao;
pub use product::ProductDao;
pub use purchase::PurchaseDao;
