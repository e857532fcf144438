//! JSON-friendly records for persons and meetings.
//!
//! Records hold raw strings so that a missing field can be told apart from an
//! invalid one. Converting back to the model re-runs every validation.

use crate::book::AddressBook;
use crate::domain::{
    Address, Email, FlagStatus, MeetingDateTime, MeetingName, Name, OtherPhones, Phone, Tag,
    ValidationError, Venue,
};
use crate::error::{StorageError, StorageResult};
use crate::models::{Meeting, Person};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stored form of a [`Meeting`]; `when` is ISO-8601.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonAdaptedMeeting {
    pub meeting_name: Option<String>,
    pub venue: Option<String>,
    pub when: Option<String>,
}

impl From<&Meeting> for JsonAdaptedMeeting {
    fn from(meeting: &Meeting) -> Self {
        Self {
            meeting_name: Some(meeting.name.to_string()),
            venue: Some(meeting.venue.to_string()),
            when: Some(meeting.when.value().format("%Y-%m-%dT%H:%M:%S").to_string()),
        }
    }
}

impl JsonAdaptedMeeting {
    pub fn to_model(&self) -> StorageResult<Meeting> {
        let name = MeetingName::new(required("Meeting", "meetingName", &self.meeting_name)?)?;
        let venue = Venue::new(required("Meeting", "venue", &self.venue)?)?;

        let when = required("Meeting", "when", &self.when)?;
        let when = when
            .parse::<NaiveDateTime>()
            .map_err(|_| ValidationError::InvalidDateTimeFormat(when.to_string()))?;

        Ok(Meeting::new(name, venue, MeetingDateTime::from(when)))
    }
}

/// Stored form of a [`Person`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub other_phones: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub meetings: Vec<JsonAdaptedMeeting>,
    pub flagged: bool,
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            other_phones: Some(person.other_phones().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            tags: person.tags().iter().map(|tag| tag.as_str().to_string()).collect(),
            meetings: person.meetings().iter().map(JsonAdaptedMeeting::from).collect(),
            flagged: person.is_flagged(),
        }
    }
}

impl JsonAdaptedPerson {
    pub fn to_model(&self) -> StorageResult<Person> {
        let name = Name::new(required("Person", "name", &self.name)?)?;
        let phone = Phone::new(required("Person", "phone", &self.phone)?)?;
        let other_phones = OtherPhones::new(self.other_phones.as_deref().unwrap_or_default())?;
        let email = Email::new(required("Person", "email", &self.email)?)?;
        let address = Address::new(required("Person", "address", &self.address)?)?;

        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let meetings = self
            .meetings
            .iter()
            .map(JsonAdaptedMeeting::to_model)
            .collect::<StorageResult<Vec<_>>>()?;

        Ok(Person::new(
            name,
            phone,
            other_phones,
            email,
            address,
            tags,
            meetings,
            FlagStatus::new(self.flagged),
        )?)
    }
}

/// Stored form of the whole [`AddressBook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonAdaptedPerson::from).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    /// Convert to the model, rejecting the whole file on the first bad record.
    pub fn to_model(&self) -> StorageResult<AddressBook> {
        let persons = self
            .persons
            .iter()
            .map(JsonAdaptedPerson::to_model)
            .collect::<StorageResult<Vec<_>>>()?;

        // Building a book only ever fails on a duplicate.
        AddressBook::from_persons(persons).map_err(|_| StorageError::DuplicatePerson)
    }
}

fn required<'a>(
    record: &'static str,
    field: &'static str,
    value: &'a Option<String>,
) -> StorageResult<&'a str> {
    value
        .as_deref()
        .ok_or(StorageError::MissingField { record, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapted_alice() -> JsonAdaptedPerson {
        JsonAdaptedPerson {
            name: Some("Alice Pauline".into()),
            phone: Some("94351253".into()),
            other_phones: Some("61234567 (home) 81234567 (office)".into()),
            email: Some("alice@example.com".into()),
            address: Some("123, Jurong West Ave 6, #08-111".into()),
            tags: vec!["friends".into()],
            meetings: vec![JsonAdaptedMeeting {
                meeting_name: Some("Lunch".into()),
                venue: Some("Cafe".into()),
                when: Some("2025-01-12T12:00:00".into()),
            }],
            flagged: true,
        }
    }

    #[test]
    fn test_valid_person_to_model_and_back() {
        let adapted = adapted_alice();
        let person = adapted.to_model().unwrap();

        assert!(person.is_flagged());
        assert_eq!(person.meetings()[0].to_string(), "Lunch at Cafe (Jan 12 2025 12:00)");
        assert_eq!(JsonAdaptedPerson::from(&person), adapted);
    }

    #[test]
    fn test_missing_fields() {
        let person = JsonAdaptedPerson {
            phone: None,
            ..adapted_alice()
        };
        assert!(matches!(
            person.to_model(),
            Err(StorageError::MissingField {
                record: "Person",
                field: "phone"
            })
        ));

        let meeting = JsonAdaptedMeeting {
            when: None,
            ..adapted_alice().meetings[0].clone()
        };
        assert!(matches!(
            meeting.to_model(),
            Err(StorageError::MissingField {
                record: "Meeting",
                field: "when"
            })
        ));
    }

    #[test]
    fn test_missing_other_phones_is_empty() {
        let person = JsonAdaptedPerson {
            other_phones: None,
            ..adapted_alice()
        };
        assert!(person.to_model().unwrap().other_phones().is_empty());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let person = JsonAdaptedPerson {
            name: Some("R@chel".into()),
            ..adapted_alice()
        };
        assert!(matches!(person.to_model(), Err(StorageError::InvalidValue(_))));

        let person = JsonAdaptedPerson {
            other_phones: Some("94351253".into()),
            ..adapted_alice()
        };
        assert!(matches!(
            person.to_model(),
            Err(StorageError::InvalidValue(ValidationError::DuplicateMainPhone(_)))
        ));

        let meeting = JsonAdaptedMeeting {
            when: Some("12/01/2025 12:00".into()),
            ..adapted_alice().meetings[0].clone()
        };
        assert!(matches!(
            meeting.to_model(),
            Err(StorageError::InvalidValue(ValidationError::InvalidDateTimeFormat(_)))
        ));
    }

    #[test]
    fn test_duplicate_persons_rejected() {
        let book = JsonSerializableAddressBook {
            persons: vec![adapted_alice(), adapted_alice()],
        };
        assert!(matches!(book.to_model(), Err(StorageError::DuplicatePerson)));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(adapted_alice()).unwrap();
        assert_eq!(json["otherPhones"], "61234567 (home) 81234567 (office)");
        assert_eq!(json["meetings"][0]["meetingName"], "Lunch");
        assert_eq!(json["flagged"], true);
    }
}
