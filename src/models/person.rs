//! Person model representing one entry of the address book.

use super::meeting::Meeting;
use crate::domain::{
    Address, Email, FlagStatus, Name, OtherPhones, Phone, Tag, ValidationError,
};
use std::collections::BTreeSet;
use std::fmt;

/// A person in the address book.
///
/// A `Person` is immutable: every edit returns a new value and leaves the
/// original untouched. Full structural equality is `PartialEq`; the weaker
/// identity used for duplicate detection is [`Person::is_same_person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    other_phones: OtherPhones,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    meetings: Vec<Meeting>,
    flag_status: FlagStatus,
}

impl Person {
    /// Create a person from validated fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateMainPhone` if the main phone also
    /// appears among the other phones.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        other_phones: OtherPhones,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        meetings: Vec<Meeting>,
        flag_status: FlagStatus,
    ) -> Result<Self, ValidationError> {
        if other_phones.contains_phone(&phone) {
            return Err(ValidationError::DuplicateMainPhone(phone.into_inner()));
        }

        Ok(Self {
            name,
            phone,
            other_phones,
            email,
            address,
            tags,
            meetings,
            flag_status,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn other_phones(&self) -> &OtherPhones {
        &self.other_phones
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    pub fn flag_status(&self) -> FlagStatus {
        self.flag_status
    }

    pub fn is_flagged(&self) -> bool {
        self.flag_status.is_flagged()
    }

    /// Identity check: two persons are the same if their main phones match.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.phone == other.phone
    }

    /// Copy of this person with `meeting` appended.
    pub fn with_meeting_added(&self, meeting: Meeting) -> Person {
        let mut meetings = self.meetings.clone();
        meetings.push(meeting);
        Person {
            meetings,
            ..self.clone()
        }
    }

    /// Copy of this person with the meeting at zero-based `index` replaced.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no meeting at `index`.
    pub fn with_meeting_replaced(
        &self,
        index: usize,
        meeting: Meeting,
    ) -> Result<Person, ValidationError> {
        self.check_meeting_index(index)?;

        let mut meetings = self.meetings.clone();
        meetings[index] = meeting;
        Ok(Person {
            meetings,
            ..self.clone()
        })
    }

    /// Copy of this person without the meeting at zero-based `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if there is no meeting at `index`.
    pub fn with_meeting_removed(&self, index: usize) -> Result<Person, ValidationError> {
        self.check_meeting_index(index)?;

        let mut meetings = self.meetings.clone();
        meetings.remove(index);
        Ok(Person {
            meetings,
            ..self.clone()
        })
    }

    pub fn with_flag_status(&self, flag_status: FlagStatus) -> Person {
        Person {
            flag_status,
            ..self.clone()
        }
    }

    fn check_meeting_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.meetings.len() {
            return Err(ValidationError::IndexOutOfBounds {
                index,
                len: self.meetings.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}", self.name, self.phone)?;
        if !self.other_phones.is_empty() {
            write!(f, "; Other Phones: {}", self.other_phones)?;
        }
        write!(f, "; Email: {}; Address: {}", self.email, self.address)?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        if !self.meetings.is_empty() {
            let meetings: Vec<String> = self.meetings.iter().map(ToString::to_string).collect();
            write!(f, "; Meetings: {}", meetings.join(", "))?;
        }
        write!(f, "; {}", self.flag_status)
    }
}
