//! Line-oriented command layer.
//!
//! Input is parsed into a validated [`Command`] first and only then executed,
//! so a rejected command never touches the model.

pub mod execution;
pub mod index;
pub mod parser;
pub mod tokenizer;

pub use execution::CommandResult;
pub use index::Index;
pub use parser::{parse_command, Command, MeetingEdit};
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};
