use crate::book::AddressBook;
use crate::error::StorageResult;
use std::path::Path;

/// Storage for the whole address book.
///
/// Provides abstraction over where the book is persisted,
/// enabling different implementations (JSON file, in-memory for tests).
pub trait AddressBookStorage {
    /// Location of the backing data.
    fn path(&self) -> &Path;

    /// Load the book; `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> StorageResult<Option<AddressBook>>;

    /// Persist the whole book, replacing what was stored.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
