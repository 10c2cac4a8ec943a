//! Customer entity.

use crate::value_objects::{Email, Gender};
use crate::CustomerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer entity representing a registered shopper.
///
/// The id is `None` until the row has been inserted and the database has
/// assigned its generated key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    /// Database-generated key; `None` before insert.
    pub id: Option<CustomerId>,

    /// Customer's first name.
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    /// Customer's last name.
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,

    /// Customer's gender.
    pub gender: Gender,

    /// Customer's date of birth.
    pub date_of_birth: NaiveDate,

    /// Customer's email address.
    pub email: Email,
}

impl Customer {
    /// Creates a new customer that has not been persisted yet.
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        gender: Gender,
        date_of_birth: NaiveDate,
        email: Email,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            gender,
            date_of_birth,
            email,
        }
    }

    /// Returns the customer's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the customer has been persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
