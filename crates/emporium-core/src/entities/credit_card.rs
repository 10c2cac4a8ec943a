//! Credit card entity.

use serde::{Deserialize, Serialize};

/// Payment card owned 1:1 by a customer, keyed by the owning customer's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Name embossed on the card.
    pub holder_name: String,
    /// Card number (never exposed via API).
    #[serde(skip_serializing)]
    pub card_number: String,
    /// Expiration in `MM/YYYY` form.
    pub exp_date: String,
    /// Card security code (never exposed via API).
    #[serde(skip_serializing)]
    pub security_code: String,
}

impl CreditCard {
    /// Creates a new credit card.
    #[must_use]
    pub fn new(
        holder_name: String,
        card_number: String,
        exp_date: String,
        security_code: String,
    ) -> Self {
        Self {
            holder_name,
            card_number,
            exp_date,
            security_code,
        }
    }

    /// Returns the card number with all but the last four digits masked.
    #[must_use]
    pub fn masked_number(&self) -> String {
        let digits = self.card_number.len();
        if digits <= 4 {
            return self.card_number.clone();
        }
        format!("{}{}", "*".repeat(digits - 4), &self.card_number[digits - 4..])
    }
}
