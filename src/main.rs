//! Address Book - demonstration entry point
//!
//! Builds a contact, persists the book to the configured file, reloads it,
//! and prints what came back.

use address_book::{logging, AddressBook, Birthday, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            logging::init("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    logging::init(&config.log_level);
    info!("Configuration loaded successfully");

    let mut record = Record::new("Anton");
    record.add_phone("0964784877")?;
    record.set_birthday(Birthday::from_ymd(1990, 10, 10)?);

    let mut address_book = AddressBook::new();
    address_book.add_record(record);

    address_book
        .save_to_file(&config.book_file)
        .with_context(|| format!("saving to {}", config.book_file.display()))?;

    let loaded = AddressBook::load_from_file(&config.book_file)
        .with_context(|| format!("loading from {}", config.book_file.display()))?;

    let anton = loaded
        .find("Anton")
        .context("Anton is missing from the reloaded book")?;
    println!("{}", anton.name());
    if let Some(phone) = anton.phones().first() {
        println!("{}", phone);
    }
    match anton.birthday() {
        Some(birthday) => println!("{}", birthday),
        None => println!("no info"),
    }
    if let Some(days) = anton.days_to_birthday() {
        println!("Days to birthday: {}", days);
    }
    println!("{:?}", address_book.find_contacts("ton"));

    for (number, page) in loaded.pages(config.page_size)?.enumerate() {
        println!("Page {}:", number + 1);
        for (_, record) in page {
            println!("  {}", record);
        }
    }

    info!("Done");
    Ok(())
}
