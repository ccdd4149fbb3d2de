//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from:
//! names, phone numbers, and birthdays. Each value object is validated at
//! construction time, so an invalid value can never be represented once
//! a field exists.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

/// A single validated scalar value.
///
/// Implementors reject invalid input in their constructors; `value` only
/// ever hands out something that already passed validation.
pub trait Field: std::fmt::Display {
    /// The underlying value type.
    type Value: ?Sized;

    /// Borrow the validated value.
    fn value(&self) -> &Self::Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn describe<F: Field>(field: &F) -> String {
        format!("<{}>", field)
    }

    #[test]
    fn test_field_values() {
        let phone = Phone::new("0964784877").unwrap();
        assert_eq!(phone.value(), "0964784877");

        let birthday = Birthday::parse("1990-10-10").unwrap();
        assert_eq!(*birthday.value(), NaiveDate::from_ymd_opt(1990, 10, 10).unwrap());
    }

    #[test]
    fn test_fields_render_natural_text() {
        assert_eq!(describe(&Name::new("Anton")), "<Anton>");
        assert_eq!(describe(&Phone::new("0964784877").unwrap()), "<0964784877>");
        assert_eq!(describe(&Birthday::parse("1990-01-05").unwrap()), "<1990-01-05>");
    }
}
