//! Checkout
//!
//! Customer contact data, the field-level validator gating submission, and
//! the transient order payload built at submission time.

pub mod order;
pub mod validator;

pub use order::{Order, OrderItem};
pub use validator::{Field, FieldErrors, validate_form};

use serde::Serialize;

/// Customer contact data for one checkout attempt.
///
/// Ephemeral: reset to empty on successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer first name.
    pub first_name: String,

    /// Customer last name.
    pub last_name: String,

    /// City of the delivery address.
    pub city: String,

    /// Street address.
    pub address: String,

    /// Postal code, 5 or 6 decimal digits.
    pub postal: String,

    /// Whether the order is a gift.
    pub is_gift: bool,
}
