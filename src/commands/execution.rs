//! Runs parsed commands against the model.

use super::index::Index;
use super::parser::{
    Command, MeetingEdit, ADD_MEETING_USAGE, ADD_USAGE, DELETE_MEETING_USAGE, DELETE_USAGE,
    EDIT_MEETING_USAGE, FIND_MEETING_USAGE, FIND_USAGE, FLAG_USAGE, UNFLAG_USAGE,
};
use crate::book::{Model, PersonFilter};
use crate::domain::FlagStatus;
use crate::error::CommandError;
use crate::models::{Meeting, Person};

/// What a successful command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

impl Command {
    /// Run the command.
    ///
    /// Every check happens before the first mutation, so on error the model
    /// is exactly as it was.
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(person) => {
                let feedback = format!("New person added: {}", person);
                model.add_person(person)?;
                Ok(CommandResult::new(feedback))
            }
            Command::Delete(index) => {
                let target = displayed_person(model, index)?;
                model.delete_person(&target)?;
                Ok(CommandResult::new(format!("Deleted Person: {}", target)))
            }
            Command::List => {
                model.update_filter(PersonFilter::ShowAll);
                Ok(CommandResult::new("Listed all persons"))
            }
            Command::Find(keywords) => {
                model.update_filter(PersonFilter::NameKeywords(keywords));
                Ok(listed(model))
            }
            Command::FindMeeting(keywords) => {
                model.update_filter(PersonFilter::MeetingNameKeywords(keywords));
                Ok(listed(model))
            }
            Command::AddMeeting { person, meeting } => add_meeting(model, person, meeting),
            Command::EditMeeting {
                person,
                meeting,
                edit,
            } => edit_meeting(model, person, meeting, &edit),
            Command::DeleteMeeting { person, meeting } => delete_meeting(model, person, meeting),
            Command::Flag(index) => set_flag(model, index, FlagStatus::FLAGGED),
            Command::Unflag(index) => set_flag(model, index, FlagStatus::NOT_FLAGGED),
            Command::Help => Ok(CommandResult::new(help_text())),
            Command::Exit => Ok(CommandResult::exiting(
                "Exiting Address Book as requested ...",
            )),
        }
    }
}

fn displayed_person(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .person_list()
        .get_one_based(index.one_based())
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)
}

fn listed(model: &Model) -> CommandResult {
    CommandResult::new(format!("{} persons listed!", model.person_list().len()))
}

fn add_meeting(
    model: &mut Model,
    person: Index,
    meeting: Meeting,
) -> Result<CommandResult, CommandError> {
    let target = displayed_person(model, person)?;
    let edited = target.with_meeting_added(meeting);

    model.set_person(&target, edited.clone())?;
    model.update_filter(PersonFilter::ShowAll);
    Ok(CommandResult::new(format!(
        "Added meeting to Person: {}",
        edited
    )))
}

fn edit_meeting(
    model: &mut Model,
    person: Index,
    meeting: Index,
    edit: &MeetingEdit,
) -> Result<CommandResult, CommandError> {
    let target = displayed_person(model, person)?;
    let current = target
        .meetings()
        .get(meeting.zero_based())
        .ok_or(CommandError::InvalidMeetingIndex)?;
    let edited = target.with_meeting_replaced(meeting.zero_based(), edit.apply_to(current))?;

    model.set_person(&target, edited.clone())?;
    model.update_filter(PersonFilter::ShowAll);
    Ok(CommandResult::new(format!("Edited Meeting: {}", edited)))
}

fn delete_meeting(
    model: &mut Model,
    person: Index,
    meeting: Index,
) -> Result<CommandResult, CommandError> {
    let target = displayed_person(model, person)?;
    if meeting.zero_based() >= target.meeting_count() {
        return Err(CommandError::InvalidMeetingIndex);
    }
    let edited = target.with_meeting_removed(meeting.zero_based())?;

    model.set_person(&target, edited.clone())?;
    model.update_filter(PersonFilter::ShowAll);
    Ok(CommandResult::new(format!(
        "Deleted meeting from Person: {}",
        edited
    )))
}

fn set_flag(
    model: &mut Model,
    index: Index,
    status: FlagStatus,
) -> Result<CommandResult, CommandError> {
    let target = displayed_person(model, index)?;
    if target.flag_status() == status {
        return Err(if status.is_flagged() {
            CommandError::AlreadyFlagged
        } else {
            CommandError::AlreadyUnflagged
        });
    }

    let edited = target.with_flag_status(status);
    model.set_person(&target, edited.clone())?;

    let (verb, logged) = if status.is_flagged() {
        ("Flagged", "flagged")
    } else {
        ("Unflagged", "unflagged")
    };
    tracing::info!(
        "{} was {} ({} -> {})",
        edited.name(),
        logged,
        target.is_flagged(),
        edited.is_flagged()
    );
    Ok(CommandResult::new(format!("{} Person: {}", verb, edited)))
}

fn help_text() -> String {
    [
        ADD_USAGE,
        DELETE_USAGE,
        "list: Lists all persons.",
        FIND_USAGE,
        ADD_MEETING_USAGE,
        EDIT_MEETING_USAGE,
        DELETE_MEETING_USAGE,
        FIND_MEETING_USAGE,
        FLAG_USAGE,
        UNFLAG_USAGE,
        "help: Shows this message.",
        "exit: Saves and exits the program.",
    ]
    .join("\n\n")
}
