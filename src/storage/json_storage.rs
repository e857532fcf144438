//! Flat JSON file storage.

use super::adapted::JsonSerializableAddressBook;
use super::traits::AddressBookStorage;
use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the address book as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<AddressBook>> {
        if !self.path.exists() {
            tracing::info!("Data file {} not found", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let stored: JsonSerializableAddressBook = serde_json::from_str(&contents)?;
        let book = stored.to_model()?;

        tracing::info!(
            persons = book.len(),
            "Loaded address book from {}",
            self.path.display()
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&JsonSerializableAddressBook::from(book))?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            persons = book.len(),
            "Saved address book to {}",
            self.path.display()
        );
        Ok(())
    }
}
