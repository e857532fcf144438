//! Turns one line of user input into a [`Command`].

use super::index::Index;
use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_MAIN_PHONE,
    PREFIX_MEETING, PREFIX_MEETING_INDEX, PREFIX_NAME, PREFIX_OTHER_PHONE, PREFIX_PERSON_INDEX,
    PREFIX_TAG, PREFIX_VENUE, PREFIX_WHEN,
};
use crate::domain::{
    Address, Email, FlagStatus, MeetingDateTime, MeetingName, Name, OtherPhones, Phone, Tag,
    Venue,
};
use crate::error::CommandError;
use crate::models::{Meeting, Person};
use std::collections::BTreeSet;

pub const ADD_USAGE: &str = "add: Adds a person to the address book.\n\
     Parameters: n=NAME mn=MAIN_PHONE [on=OTHER_PHONES] e=EMAIL a=ADDRESS [t=TAG]...\n\
     Example: add n=John Doe mn=98765432 e=johnd@example.com a=311, Clementi Ave 2, #02-25 t=friends";
pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used in \
     the displayed person list.\nParameters: INDEX (must be a positive integer)\nExample: delete 1";
pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
     keywords (case-insensitive) and displays them as a list.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find alice bob charlie";
pub const ADD_MEETING_USAGE: &str = "addmt: Adds a meeting for the person identified by the index \
     number used in the last person listing.\n\
     Parameters: p=INDEX (must be a positive integer) m=MEETING v=VENUE w=WHEN\n\
     Example: addmt p=1 m=Financial advice sharing v=AMK Hub w=2025-11-01 1600";
pub const EDIT_MEETING_USAGE: &str = "editmt: Edits the details of the meeting identified for the \
     person identified by the index number used in the displayed person list. Existing values will \
     be overwritten by the input values.\n\
     Parameters: p=INDEX (must be a positive integer) i=MEETING_INDEX (must be a positive integer) \
     [m=MEETING] [v=VENUE] [w=WHEN]\n\
     Example: editmt p=1 i=2 v=Starbucks at J8 w=2025-10-05 1600";
pub const DELETE_MEETING_USAGE: &str = "deletemt: Deletes the meeting for the person identified by \
     the index number used in the displayed person list and the index number of the meeting in the \
     person's meeting list.\n\
     Parameters: INDEX (must be a positive integer) i=MEETING_INDEX (must be a positive integer)\n\
     Example: deletemt 1 i=1";
pub const FIND_MEETING_USAGE: &str = "findmt: Finds all persons with a meeting whose name contains \
     any of the specified keywords (case-insensitive) and displays them as a list.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: findmt lunch review";
pub const FLAG_USAGE: &str = "flag: Flags the person identified by the index number used in the \
     displayed person list.\nParameters: INDEX (must be a positive integer)\nExample: flag 1";
pub const UNFLAG_USAGE: &str = "unflag: Unflags the person identified by the index number used in \
     the displayed person list.\nParameters: INDEX (must be a positive integer)\nExample: unflag 1";

/// Fields to change in a meeting; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingEdit {
    pub name: Option<MeetingName>,
    pub venue: Option<Venue>,
    pub when: Option<MeetingDateTime>,
}

impl MeetingEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.venue.is_some() || self.when.is_some()
    }

    pub fn apply_to(&self, meeting: &Meeting) -> Meeting {
        meeting.with_changes(self.name.clone(), self.venue.clone(), self.when)
    }
}

/// A fully validated user command, ready to run against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Delete(Index),
    List,
    Find(Vec<String>),
    AddMeeting {
        person: Index,
        meeting: Meeting,
    },
    EditMeeting {
        person: Index,
        meeting: Index,
        edit: MeetingEdit,
    },
    DeleteMeeting {
        person: Index,
        meeting: Index,
    },
    FindMeeting(Vec<String>),
    Flag(Index),
    Unflag(Index),
    Help,
    Exit,
}

/// Parse one input line.
///
/// # Errors
///
/// Any [`CommandError`] describing the first problem found; nothing is
/// executed when parsing fails.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let (word, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    tracing::debug!(command = word, args, "Parsing command");

    match word {
        "add" => parse_add(args),
        "delete" => parse_single_index(args, DELETE_USAGE).map(Command::Delete),
        "list" => Ok(Command::List),
        "find" => parse_keywords(args, FIND_USAGE).map(Command::Find),
        "addmt" => parse_add_meeting(args),
        "editmt" => parse_edit_meeting(args),
        "deletemt" => parse_delete_meeting(args),
        "findmt" => parse_keywords(args, FIND_MEETING_USAGE).map(Command::FindMeeting),
        "flag" => parse_single_index(args, FLAG_USAGE).map(Command::Flag),
        "unflag" => parse_single_index(args, UNFLAG_USAGE).map(Command::Unflag),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(CommandError::UnknownCommand(word.to_string())),
    }
}

fn invalid_format(usage: &'static str) -> CommandError {
    CommandError::InvalidFormat { usage }
}

fn require_prefixes(
    map: &ArgumentMultimap,
    prefixes: &[Prefix],
    usage: &'static str,
) -> Result<(), CommandError> {
    if prefixes.iter().all(|prefix| map.is_present(*prefix)) && map.preamble().is_empty() {
        Ok(())
    } else {
        Err(invalid_format(usage))
    }
}

fn index_value(value: Option<&str>, usage: &'static str) -> Result<Index, CommandError> {
    value
        .and_then(Index::parse)
        .ok_or_else(|| invalid_format(usage))
}

fn parse_add(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_MAIN_PHONE,
            PREFIX_OTHER_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    require_prefixes(
        &map,
        &[PREFIX_NAME, PREFIX_MAIN_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
        ADD_USAGE,
    )?;
    map.verify_no_duplicate_prefixes(&[
        PREFIX_NAME,
        PREFIX_MAIN_PHONE,
        PREFIX_OTHER_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
    ])?;

    let value = |prefix| map.value(prefix).unwrap_or_default();

    let name = Name::new(value(PREFIX_NAME).trim())?;
    let phone = Phone::new(value(PREFIX_MAIN_PHONE).trim())?;
    let other_phones = OtherPhones::new(value(PREFIX_OTHER_PHONE))?;
    let email = Email::new(value(PREFIX_EMAIL))?;
    let address = Address::new(value(PREFIX_ADDRESS))?;
    let tags = map
        .all_values(PREFIX_TAG)
        .iter()
        .map(|tag| Tag::new(tag.trim()))
        .collect::<Result<BTreeSet<_>, _>>()?;

    let person = Person::new(
        name,
        phone,
        other_phones,
        email,
        address,
        tags,
        Vec::new(),
        FlagStatus::NOT_FLAGGED,
    )?;
    Ok(Command::Add(person))
}

fn parse_single_index(args: &str, usage: &'static str) -> Result<Index, CommandError> {
    Index::parse(args).ok_or_else(|| invalid_format(usage))
}

fn parse_keywords(args: &str, usage: &'static str) -> Result<Vec<String>, CommandError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(usage));
    }
    Ok(keywords)
}

fn parse_add_meeting(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[PREFIX_PERSON_INDEX, PREFIX_MEETING, PREFIX_VENUE, PREFIX_WHEN],
    );
    require_prefixes(
        &map,
        &[PREFIX_PERSON_INDEX, PREFIX_MEETING, PREFIX_VENUE, PREFIX_WHEN],
        ADD_MEETING_USAGE,
    )?;
    map.verify_no_duplicate_prefixes(&[
        PREFIX_PERSON_INDEX,
        PREFIX_MEETING,
        PREFIX_VENUE,
        PREFIX_WHEN,
    ])?;

    let person = index_value(map.value(PREFIX_PERSON_INDEX), ADD_MEETING_USAGE)?;
    let meeting = Meeting::parse(
        map.value(PREFIX_MEETING).unwrap_or_default(),
        map.value(PREFIX_VENUE).unwrap_or_default(),
        map.value(PREFIX_WHEN).unwrap_or_default(),
    )?;

    Ok(Command::AddMeeting { person, meeting })
}

fn parse_edit_meeting(args: &str) -> Result<Command, CommandError> {
    if args.trim().is_empty() {
        return Err(invalid_format(EDIT_MEETING_USAGE));
    }

    let map = tokenize(
        args,
        &[
            PREFIX_PERSON_INDEX,
            PREFIX_MEETING_INDEX,
            PREFIX_MEETING,
            PREFIX_VENUE,
            PREFIX_WHEN,
        ],
    );
    require_prefixes(
        &map,
        &[PREFIX_PERSON_INDEX, PREFIX_MEETING_INDEX],
        EDIT_MEETING_USAGE,
    )?;

    let person = index_value(map.value(PREFIX_PERSON_INDEX), EDIT_MEETING_USAGE)?;
    let meeting = index_value(map.value(PREFIX_MEETING_INDEX), EDIT_MEETING_USAGE)?;

    map.verify_no_duplicate_prefixes(&[
        PREFIX_PERSON_INDEX,
        PREFIX_MEETING_INDEX,
        PREFIX_MEETING,
        PREFIX_VENUE,
        PREFIX_WHEN,
    ])?;

    let edit = MeetingEdit {
        name: map
            .value(PREFIX_MEETING)
            .map(|name| MeetingName::new(name.trim()))
            .transpose()?,
        venue: map
            .value(PREFIX_VENUE)
            .map(|venue| Venue::new(venue.trim()))
            .transpose()?,
        when: map.value(PREFIX_WHEN).map(MeetingDateTime::parse).transpose()?,
    };
    if !edit.is_any_field_edited() {
        return Err(CommandError::NoFieldsEdited);
    }

    Ok(Command::EditMeeting {
        person,
        meeting,
        edit,
    })
}

fn parse_delete_meeting(args: &str) -> Result<Command, CommandError> {
    if args.trim().is_empty() {
        return Err(invalid_format(DELETE_MEETING_USAGE));
    }

    let map = tokenize(args, &[PREFIX_MEETING_INDEX]);
    map.verify_no_duplicate_prefixes(&[PREFIX_MEETING_INDEX])?;

    let person = Index::parse(map.preamble()).ok_or_else(|| invalid_format(DELETE_MEETING_USAGE))?;
    let meeting = index_value(map.value(PREFIX_MEETING_INDEX), DELETE_MEETING_USAGE)?;

    Ok(Command::DeleteMeeting { person, meeting })
}
