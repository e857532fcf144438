//! Persistence of the address book.
//!
//! The book is stored as a single JSON document; [`AddressBookStorage`] is the
//! seam that lets tests swap the file for an in-memory double.

pub mod adapted;
pub mod json_storage;
pub mod traits;

pub use adapted::{JsonAdaptedMeeting, JsonAdaptedPerson, JsonSerializableAddressBook};
pub use json_storage::JsonAddressBookStorage;
pub use traits::AddressBookStorage;
