//! Domain value objects and types.
//!
//! Every value object validates at construction time and never holds an
//! invalid value: constructors return `Result<Self, ValidationError>`, and
//! deserialization runs the same validation.

pub mod address;
pub mod email;
pub mod errors;
pub mod flag_status;
pub mod meeting_date_time;
pub mod meeting_name;
pub mod name;
pub mod phone;
pub mod tag;
pub mod venue;

pub use address::Address;
pub use email::Email;
pub use errors::{SpacingIssue, ValidationError};
pub use flag_status::FlagStatus;
pub use meeting_date_time::MeetingDateTime;
pub use meeting_name::MeetingName;
pub use name::Name;
pub use phone::{OtherPhones, Phone};
pub use tag::Tag;
pub use venue::Venue;
