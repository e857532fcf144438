//! Canonical, insertion-ordered person collection.

use crate::error::{BookError, BookResult};
use crate::models::Person;

/// The canonical list of persons, in insertion order.
///
/// No two persons in the book are the same person (same main phone).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from persons in order, rejecting same-person duplicates.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> BookResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
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

    /// Returns true if a person with the same identity is in the book.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Append a person.
    pub fn add(&mut self, person: Person) -> BookResult<()> {
        if self.contains(&person) {
            return Err(BookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// `edited` may keep the identity of `target` but must not take the
    /// identity of any other person in the book.
    pub fn replace(&mut self, target: &Person, edited: Person) -> BookResult<()> {
        let position = self.position_of(target)?;

        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(BookError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> BookResult<()> {
        let position = self.position_of(target)?;
        self.persons.remove(position);
        Ok(())
    }

    fn position_of(&self, target: &Person) -> BookResult<usize> {
        self.persons
            .iter()
            .position(|p| p == target)
            .ok_or(BookError::PersonNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, FlagStatus, Name, OtherPhones, Phone};
    use std::collections::BTreeSet;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            OtherPhones::default(),
            Email::new("someone@example.com").unwrap(),
            Address::new("Somewhere 1").unwrap(),
            BTreeSet::new(),
            Vec::new(),
            FlagStatus::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_rejects_same_person() {
        let mut book = AddressBook::new();
        book.add(person("Alice", "11111111")).unwrap();
        assert_eq!(
            book.add(person("Someone Else", "11111111")),
            Err(BookError::DuplicatePerson)
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_replace_keeps_position() {
        let alice = person("Alice", "11111111");
        let bob = person("Bob", "22222222");
        let carl = person("Carl", "33333333");
        let mut book = AddressBook::from_persons([alice.clone(), bob.clone(), carl]).unwrap();

        let flagged_bob = bob.with_flag_status(FlagStatus::FLAGGED);
        book.replace(&bob, flagged_bob.clone()).unwrap();

        assert_eq!(book.persons()[0], alice);
        assert_eq!(book.persons()[1], flagged_bob);
    }

    #[test]
    fn test_replace_rejects_taking_other_identity() {
        let alice = person("Alice", "11111111");
        let bob = person("Bob", "22222222");
        let mut book = AddressBook::from_persons([alice.clone(), bob]).unwrap();

        let result = book.replace(&alice, person("Alice", "22222222"));
        assert_eq!(result, Err(BookError::DuplicatePerson));
        assert_eq!(book.persons()[0], alice);
    }

    #[test]
    fn test_remove() {
        let alice = person("Alice", "11111111");
        let bob = person("Bob", "22222222");
        let mut book = AddressBook::from_persons([alice.clone(), bob.clone()]).unwrap();

        book.remove(&alice).unwrap();
        assert_eq!(book.persons(), &[bob]);
        assert_eq!(book.remove(&alice), Err(BookError::PersonNotFound));
    }

    #[test]
    fn test_from_persons_rejects_duplicates() {
        let result = AddressBook::from_persons([person("A", "111"), person("B", "111")]);
        assert_eq!(result, Err(BookError::DuplicatePerson));
    }
}
