//! Value objects used by the Emporium entities.

mod email;
mod gender;

pub use email::{Email, EmailError};
pub use gender::Gender;
