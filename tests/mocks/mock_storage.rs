use address_book::error::{StorageError, StorageResult};
use address_book::storage::AddressBookStorage;
use address_book::AddressBook;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};

/// Mock address book storage for testing.
///
/// Keeps the last saved book in memory and counts saves so tests can check
/// when persistence happened.
pub struct MockAddressBookStorage {
    path: PathBuf,
    stored: RefCell<Option<AddressBook>>,
    save_count: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MockAddressBookStorage {
    /// Create a new empty MockAddressBookStorage.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("memory/addressbook.json"),
            stored: RefCell::new(None),
            save_count: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    /// Create a storage that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let storage = Self::new();
        storage.stored.replace(Some(book));
        storage
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// Let saves succeed again.
    pub fn allow_saves(&self) {
        self.fail_saves.set(false);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }
}

impl Default for MockAddressBookStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBookStorage for MockAddressBookStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StorageResult<Option<AddressBook>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        self.stored.replace(Some(book.clone()));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
