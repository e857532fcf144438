//! In-memory model: the book, the active filter and the displayed list.

use super::address_book::AddressBook;
use super::filters::PersonFilter;
use super::person_list::PersonList;
use crate::error::BookResult;
use crate::models::Person;

/// Owns the canonical [`AddressBook`] and keeps the displayed [`PersonList`]
/// in step with it.
///
/// The displayed list is re-projected after every change to the book or the
/// filter, so it always reflects the latest state. A failed mutation leaves
/// the book, the filter and the list as they were.
#[derive(Debug, Clone, Default)]
pub struct Model {
    book: AddressBook,
    filter: PersonFilter,
    displayed: PersonList,
    modified: bool,
}

impl Model {
    pub fn new(book: AddressBook) -> Self {
        let filter = PersonFilter::ShowAll;
        let displayed = PersonList::project(&book, &filter);
        Self {
            book,
            filter,
            displayed,
            modified: false,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn person_list(&self) -> &PersonList {
        &self.displayed
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> BookResult<()> {
        tracing::info!(name = %person.name(), "Adding person");
        self.book.add(person)?;
        self.after_change();
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> BookResult<()> {
        tracing::info!(name = %target.name(), "Deleting person");
        self.book.remove(target)?;
        self.after_change();
        Ok(())
    }

    /// Replace `target` with `edited` in place.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> BookResult<()> {
        tracing::debug!(name = %target.name(), "Replacing person");
        self.book.replace(target, edited)?;
        self.after_change();
        Ok(())
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        tracing::debug!(filter = %filter, "Updating person filter");
        self.filter = filter;
        self.displayed = PersonList::project(&self.book, &self.filter);
    }

    /// Whether the book changed since it was last saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record that the current book has been persisted.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    fn after_change(&mut self) {
        self.modified = true;
        self.displayed = PersonList::project(&self.book, &self.filter);
    }
}
