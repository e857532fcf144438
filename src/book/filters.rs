//! Predicates that decide which persons are displayed.

use crate::models::Person;
use std::fmt;

/// Which persons the displayed list contains.
///
/// Keyword filters match whole words, ignoring case; a person matches if any
/// keyword equals any word of the searched field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    ShowAll,
    NameKeywords(Vec<String>),
    MeetingNameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::ShowAll => true,
            PersonFilter::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| person.name().contains_word_ignore_case(keyword)),
            PersonFilter::MeetingNameKeywords(keywords) => keywords.iter().any(|keyword| {
                person
                    .meetings()
                    .iter()
                    .any(|meeting| meeting.name.contains_word_ignore_case(keyword))
            }),
        }
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonFilter::ShowAll => write!(f, "all persons"),
            PersonFilter::NameKeywords(keywords) => write!(f, "name keywords {:?}", keywords),
            PersonFilter::MeetingNameKeywords(keywords) => {
                write!(f, "meeting name keywords {:?}", keywords)
            }
        }
    }
}
