//! The canonical person collection and the views derived from it.
//!
//! - **address_book**: insertion-ordered persons, unique by main phone
//! - **filters**: which persons are displayed
//! - **person_list**: filtered, flagged-first projection of the book
//! - **model**: owns the book and filter, re-projects after every change

pub mod address_book;
pub mod filters;
pub mod model;
pub mod person_list;

pub use address_book::AddressBook;
pub use filters::PersonFilter;
pub use model::Model;
pub use person_list::PersonList;
