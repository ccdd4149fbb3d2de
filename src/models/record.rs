//! Record model representing one contact in an address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::debug;

/// One contact: a name, an ordered list of phones, and an optional birthday.
///
/// Phones keep the order they were added in. Duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record with a birthday already set.
    pub fn with_birthday(name: impl Into<Name>, birthday: Birthday) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is malformed; the
    /// record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first stored phone equal to `phone`.
    ///
    /// Returns the removed phone, or `None` when the record does not have it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` itself is malformed.
    pub fn remove_phone(&mut self, phone: &str) -> Result<Option<Phone>, ValidationError> {
        let phone = Phone::new(phone)?;
        let removed = self
            .position_of(phone.as_str())
            .map(|index| self.phones.remove(index));

        if removed.is_none() {
            debug!(contact = %self.name, phone = %phone, "Phone to remove not found");
        }
        Ok(removed)
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// `old_phone` is compared as-is against the stored values. The position
    /// of the replaced phone is preserved.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PhoneNotFound` if no stored phone equals `old_phone`
    /// - `AddressBookError::Validation` if `new_phone` is malformed
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> AddressBookResult<()> {
        let index = self
            .position_of(old_phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old_phone.to_string()))?;

        let replacement = Phone::new(new_phone)?;
        debug!(
            contact = %self.name,
            old = old_phone,
            new = %replacement,
            "Editing phone"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first stored phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is malformed.
    pub fn find_phone(&self, phone: &str) -> Result<Option<&Phone>, ValidationError> {
        let phone = Phone::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Days until the next birthday, counted from the local calendar date.
    ///
    /// `None` when the record has no birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 when it is `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "no info"),
        }
    }
}
