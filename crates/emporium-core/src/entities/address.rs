//! Address entity.

use serde::{Deserialize, Serialize};

/// Postal address owned 1:1 by a customer.
///
/// Addresses carry no key of their own; the owning customer's id is the
/// primary key of the underlying row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First street line.
    pub line1: String,
    /// Second street line (apartment, suite, ...).
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Creates a new address.
    #[must_use]
    pub fn new(
        line1: String,
        line2: Option<String>,
        city: String,
        state: String,
        zip_code: String,
    ) -> Self {
        Self {
            line1,
            line2,
            city,
            state,
            zip_code,
        }
    }
}
