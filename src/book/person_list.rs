//! The displayed person list: a filtered, flag-sorted projection of the book.

use super::address_book::AddressBook;
use super::filters::PersonFilter;
use crate::models::Person;

/// A materialized snapshot of the persons on display.
///
/// Flagged persons come first; within each group persons keep their
/// insertion order in the book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonList {
    persons: Vec<Person>,
}

impl PersonList {
    /// Filter the book, then stable-sort flagged persons to the front.
    pub fn project(book: &AddressBook, filter: &PersonFilter) -> Self {
        let mut persons: Vec<Person> = book
            .persons()
            .iter()
            .filter(|person| filter.matches(person))
            .cloned()
            .collect();
        persons.sort_by_key(Person::flag_status);

        tracing::debug!(
            shown = persons.len(),
            total = book.len(),
            filter = %filter,
            "Projected person list"
        );
        Self { persons }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// The person shown at one-based `index`.
    pub fn get_one_based(&self, index: usize) -> Option<&Person> {
        index.checked_sub(1).and_then(|i| self.persons.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }
}
