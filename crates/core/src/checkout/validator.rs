//! Order validator
//!
//! A table of pure per-field validators over customer contact data. Each
//! validator returns the first failing rule's message; `validate_form` always
//! runs all of them and checkout is permitted iff every message is empty.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::checkout::Customer;

/// A validated customer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Customer first name.
    FirstName,

    /// Customer last name.
    LastName,

    /// City of the delivery address.
    City,

    /// Street address.
    Address,

    /// Postal code.
    Postal,
}

impl Field {
    /// All validated fields, in form order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::City,
        Self::Address,
        Self::Postal,
    ];

    /// Field name as it appears in the form model.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::City => "city",
            Self::Address => "address",
            Self::Postal => "postal",
        }
    }

    fn value(self, customer: &Customer) -> &str {
        match self {
            Self::FirstName => &customer.first_name,
            Self::LastName => &customer.last_name,
            Self::City => &customer.city,
            Self::Address => &customer.address,
            Self::Postal => &customer.postal,
        }
    }

    fn validator(self) -> fn(&str) -> Option<&'static str> {
        match self {
            Self::FirstName | Self::LastName | Self::City => validate_name,
            Self::Address => validate_address,
            Self::Postal => validate_postal,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field validation messages; an empty message means the field is valid.
///
/// Recomputed on every validation pass, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: FxHashMap<Field, String>,
}

impl FieldErrors {
    /// Create an error map with every field valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The message for a field; empty when the field is valid.
    #[must_use]
    pub fn message(&self, field: Field) -> &str {
        self.messages.get(&field).map_or("", String::as_str)
    }

    /// Whether every field's message is empty.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Reset every field to valid.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn set(&mut self, field: Field, message: &str) {
        self.messages.insert(field, message.to_owned());
    }
}

/// Validate every field of the customer form.
///
/// Always evaluates all five fields (no short-circuiting); pure and
/// idempotent, so two passes over unchanged input yield identical errors.
#[must_use]
pub fn validate_form(customer: &Customer) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        let message = (field.validator())(field.value(customer)).unwrap_or("");

        errors.set(field, message);
    }

    errors
}

// required -> min length 2 -> letters/spaces only
fn validate_name(value: &str) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Some("Required");
    }

    if value.chars().count() < 2 {
        return Some("Must be at least 2 characters");
    }

    if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Some("Letters and spaces only");
    }

    None
}

// required -> min length 5
fn validate_address(value: &str) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Some("Required");
    }

    if value.chars().count() < 5 {
        return Some("Must be at least 5 characters");
    }

    None
}

// required -> exactly 5 or 6 decimal digits
fn validate_postal(value: &str) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Some("Required");
    }

    let digits = value.chars().count();

    if !(5..=6).contains(&digits) || !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("Must be 5 or 6 digits");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> Customer {
        Customer {
            first_name: "Amira".to_owned(),
            last_name: "Haddad".to_owned(),
            city: "Dubai".to_owned(),
            address: "14 Al Wasl Road".to_owned(),
            postal: "12345".to_owned(),
            is_gift: false,
        }
    }

    #[test]
    fn valid_customer_passes_every_field() {
        let errors = validate_form(&valid_customer());

        assert!(errors.is_clear(), "expected no errors, got {errors:?}");

        for field in Field::ALL {
            assert_eq!(errors.message(field), "");
        }
    }

    #[test]
    fn all_fields_are_evaluated_even_after_a_failure() {
        let errors = validate_form(&Customer::default());

        for field in Field::ALL {
            assert_eq!(
                errors.message(field),
                "Required",
                "blank {field} should be required"
            );
        }
    }

    #[test]
    fn name_shorter_than_two_characters_fails() {
        let customer = Customer {
            first_name: "A".to_owned(),
            ..valid_customer()
        };

        let errors = validate_form(&customer);

        assert_eq!(
            errors.message(Field::FirstName),
            "Must be at least 2 characters"
        );
        assert!(!errors.is_clear());
    }

    #[test]
    fn name_with_digits_fails() {
        let customer = Customer {
            city: "Dubai 2".to_owned(),
            ..valid_customer()
        };

        let errors = validate_form(&customer);

        assert_eq!(errors.message(Field::City), "Letters and spaces only");
    }

    #[test]
    fn name_with_inner_spaces_passes() {
        let customer = Customer {
            last_name: "Al Farsi".to_owned(),
            ..valid_customer()
        };

        assert!(validate_form(&customer).is_clear());
    }

    #[test]
    fn whitespace_only_name_is_required_not_too_short() {
        let customer = Customer {
            first_name: "   ".to_owned(),
            ..valid_customer()
        };

        assert_eq!(validate_form(&customer).message(Field::FirstName), "Required");
    }

    #[test]
    fn short_address_fails() {
        let customer = Customer {
            address: "14 A".to_owned(),
            ..valid_customer()
        };

        assert_eq!(
            validate_form(&customer).message(Field::Address),
            "Must be at least 5 characters"
        );
    }

    #[test]
    fn four_digit_postal_fails() {
        let customer = Customer {
            postal: "1234".to_owned(),
            ..valid_customer()
        };

        assert_eq!(
            validate_form(&customer).message(Field::Postal),
            "Must be 5 or 6 digits"
        );
    }

    #[test]
    fn five_and_six_digit_postals_pass() {
        for postal in ["12345", "123456"] {
            let customer = Customer {
                postal: postal.to_owned(),
                ..valid_customer()
            };

            assert!(
                validate_form(&customer).is_clear(),
                "postal {postal} should be valid"
            );
        }
    }

    #[test]
    fn postal_with_letters_fails() {
        let customer = Customer {
            postal: "12a45".to_owned(),
            ..valid_customer()
        };

        assert_eq!(
            validate_form(&customer).message(Field::Postal),
            "Must be 5 or 6 digits"
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let customer = Customer {
            postal: "1234".to_owned(),
            ..valid_customer()
        };

        assert_eq!(validate_form(&customer), validate_form(&customer));
    }
}
