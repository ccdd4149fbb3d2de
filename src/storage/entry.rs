//! The persisted form of a single record.

use crate::domain::{Birthday, ValidationError};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// One element of the persisted JSON array.
///
/// ```json
/// {"name": "Anton", "phones": ["0964784877"], "birthday": "1990-10-10"}
/// ```
///
/// `birthday` is always written, as `null` when the record has none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(Birthday::to_string),
        }
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = ValidationError;

    /// Rebuild a record, validating every phone and the birthday.
    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let mut record = match entry.birthday.as_deref() {
            Some(birthday) => Record::with_birthday(entry.name, Birthday::parse(birthday)?),
            None => Record::new(entry.name),
        };

        for phone in &entry.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    fn sample_entry() -> RecordEntry {
        RecordEntry {
            name: "Anton".to_string(),
            phones: vec!["0964784877".to_string(), "0501234567".to_string()],
            birthday: Some("1990-10-10".to_string()),
        }
    }

    #[test]
    fn test_entry_from_record() {
        let mut record = Record::with_birthday("Anton", Birthday::parse("1990-10-10").unwrap());
        record.add_phone("0964784877").unwrap();

        let entry = RecordEntry::from(&record);
        assert_eq!(entry.name, "Anton");
        assert_eq!(entry.phones, vec!["0964784877".to_string()]);
        assert_eq!(entry.birthday.as_deref(), Some("1990-10-10"));
    }

    #[test]
    fn test_entry_without_birthday_serializes_null() {
        let entry = RecordEntry::from(&Record::new("Anton"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Anton","phones":[],"birthday":null}"#);
    }

    #[test]
    fn test_record_from_entry() {
        let record = Record::try_from(sample_entry()).unwrap();
        assert_eq!(record.name().as_str(), "Anton");
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0964784877", "0501234567"]);
        assert_eq!(record.birthday().unwrap().to_string(), "1990-10-10");
    }

    #[test]
    fn test_record_from_entry_invalid_phone() {
        let mut entry = sample_entry();
        entry.phones.push("123".to_string());
        assert_eq!(
            Record::try_from(entry),
            Err(ValidationError::InvalidPhone("123".to_string()))
        );
    }

    #[test]
    fn test_record_from_entry_invalid_birthday() {
        let mut entry = sample_entry();
        entry.birthday = Some("10/10/1990".to_string());
        assert!(matches!(
            Record::try_from(entry),
            Err(ValidationError::InvalidBirthday(_))
        ));
    }
}
