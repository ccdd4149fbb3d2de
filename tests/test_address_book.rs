//! End-to-end tests for contact management through the public API.

use address_book::{AddressBook, AddressBookError, Birthday, Page, Record, ValidationError};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contact(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

/// Test a full contact lifecycle: add, edit phones, search, delete.
#[test]
fn test_contact_lifecycle() {
    let mut book = AddressBook::new();
    book.add_record(contact("John", &["1234567890", "5555555555"]));
    book.add_record(contact("Jane", &["9876543210"]));

    let john = book.get_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.find_phone("5555555555").unwrap().map(|p| p.as_str()),
        Some("5555555555")
    );

    let john = book.find("John").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555, birthday: no info"
    );

    assert!(book.delete("Jane").is_some());
    assert!(book.find("Jane").is_none());
    assert!(book.delete("Jane").is_none());
}

#[test]
fn test_edit_phone_errors() {
    let mut record = contact("John", &["1234567890"]);

    assert!(matches!(
        record.edit_phone("0000000000", "1112223333"),
        Err(AddressBookError::PhoneNotFound(_))
    ));
    assert!(matches!(
        record.edit_phone("1234567890", "111-222-33"),
        Err(AddressBookError::Validation(ValidationError::InvalidPhone(_)))
    ));
    assert_eq!(record.phones()[0].as_str(), "1234567890");
}

#[test]
fn test_anton_days_to_birthday() {
    let mut record = Record::new("Anton");
    record.add_phone("0964784877").unwrap();
    record.set_birthday(Birthday::from_ymd(1990, 10, 10).unwrap());

    // Before, on, and after the birthday
    assert_eq!(record.days_to_birthday_from(date(2026, 10, 1)), Some(9));
    assert_eq!(record.days_to_birthday_from(date(2026, 10, 10)), Some(0));
    assert_eq!(record.days_to_birthday_from(date(2026, 10, 19)), Some(356));
}

#[test]
fn test_pages_cover_every_record_once() {
    let book: AddressBook = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(Record::new)
        .collect();

    let pages: Vec<Page> = book.pages(2).unwrap().collect();
    let sizes: Vec<usize> = pages.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let names: Vec<&str> = pages.iter().flatten().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_find_contacts_duplicates_name_and_phone_match() {
    let book: AddressBook = std::iter::once(contact("Room 101", &["1010000000"])).collect();

    let results = book.find_contacts("101");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], results[1]);
}

#[test]
fn test_find_contacts_orders_by_record() {
    let book: AddressBook = vec![
        contact("Anna", &["0500000001"]),
        contact("Boris", &["0670000001"]),
        contact("Anton", &[]),
    ]
    .into_iter()
    .collect();

    let results = book.find_contacts("An");
    assert_eq!(results.len(), 2);
    assert!(results[0].starts_with("Contact name: Anna"));
    assert!(results[1].starts_with("Contact name: Anton"));

    let results = book.find_contacts("0001");
    assert_eq!(results.len(), 2);
}
