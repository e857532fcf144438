//! Meeting model, owned by a person.

use crate::domain::{MeetingDateTime, MeetingName, ValidationError, Venue};
use std::fmt;

/// A meeting with a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meeting {
    pub name: MeetingName,
    pub venue: Venue,
    pub when: MeetingDateTime,
}

impl Meeting {
    pub fn new(name: MeetingName, venue: Venue, when: MeetingDateTime) -> Self {
        Self { name, venue, when }
    }

    /// Validate all three raw fields and build a meeting.
    ///
    /// Fields are checked in order name, venue, when; the first failure wins.
    pub fn parse(name: &str, venue: &str, when: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: MeetingName::new(name.trim())?,
            venue: Venue::new(venue.trim())?,
            when: MeetingDateTime::parse(when)?,
        })
    }

    /// Copy of this meeting with any given field replaced.
    pub fn with_changes(
        &self,
        name: Option<MeetingName>,
        venue: Option<Venue>,
        when: Option<MeetingDateTime>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| self.name.clone()),
            venue: venue.unwrap_or_else(|| self.venue.clone()),
            when: when.unwrap_or(self.when),
        }
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} ({})", self.name, self.venue, self.when)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_parse_and_display() {
        let meeting = Meeting::parse("Project sync", "COM1/B1-15", "28/12/2025 14:00").unwrap();
        assert_eq!(
            meeting.to_string(),
            "Project sync at COM1/B1-15 (Dec 28 2025 14:00)"
        );
    }

    #[test]
    fn test_meeting_parse_reports_first_invalid_field() {
        assert!(matches!(
            Meeting::parse("lunch@noon", "@home", "bad"),
            Err(ValidationError::ValueFormat {
                field: "meeting name",
                ..
            })
        ));
        assert!(matches!(
            Meeting::parse("Lunch", "@home", "bad"),
            Err(ValidationError::ValueFormat { field: "venue", .. })
        ));
        assert!(matches!(
            Meeting::parse("Lunch", "Cafe", "bad"),
            Err(ValidationError::InvalidDateTimeFormat(_))
        ));
    }

    #[test]
    fn test_meeting_with_changes() {
        let meeting = Meeting::parse("Lunch", "Cafe", "2025-01-12 1200").unwrap();
        let moved = meeting.with_changes(None, Some(Venue::new("Canteen").unwrap()), None);

        assert_eq!(moved.name, meeting.name);
        assert_eq!(moved.venue.as_str(), "Canteen");
        assert_eq!(moved.when, meeting.when);
        assert_eq!(meeting.venue.as_str(), "Cafe");
    }

    #[test]
    fn test_meeting_equality_by_value() {
        let a = Meeting::parse("Lunch", "Cafe", "2025-01-12 1200").unwrap();
        let b = Meeting::parse("Lunch", "Cafe", "12/01/2025 12:00").unwrap();
        assert_eq!(a, b);
    }
}
