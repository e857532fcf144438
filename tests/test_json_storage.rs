//! Round trips through the JSON data file.

use address_book::error::StorageError;
use address_book::storage::AddressBookStorage;
use address_book::{parse_command, JsonAddressBookStorage, Model};
use std::fs;
use tempfile::TempDir;

fn populated_model() -> Model {
    let mut model = Model::default();
    for line in [
        "add n=Alice Tan mn=+65 91234567 on=81234567 (home) e=alice@work.com (work) alice@me.com (own) a=1 Main St t=friends",
        "add n=Bob Lee mn=92345678 e=bob@example.com a=2 Side Rd",
        "addmt p=2 m=Quarterly review v=Office w=2025-11-01 1600",
        "flag 2",
    ] {
        parse_command(line)
            .and_then(|command| command.execute(&mut model))
            .unwrap();
    }
    model
}

#[test]
fn test_save_and_reload_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("addressbook.json"));
    let model = populated_model();

    storage.save(model.address_book()).unwrap();
    let reloaded = storage.read().unwrap().unwrap();

    assert_eq!(&reloaded, model.address_book());
    let bob = &reloaded.persons()[1];
    assert!(bob.is_flagged());
    assert_eq!(bob.meetings()[0].when.to_string(), "Nov 01 2025 16:00");
}

#[test]
fn test_saved_document_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.json");
    let storage = JsonAddressBookStorage::new(&path);

    storage.save(populated_model().address_book()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let bob = &json["persons"][1];
    assert_eq!(bob["name"], "Bob Lee");
    assert_eq!(bob["flagged"], true);
    assert_eq!(bob["meetings"][0]["meetingName"], "Quarterly review");
    assert_eq!(bob["meetings"][0]["when"], "2025-11-01T16:00:00");

    let alice = &json["persons"][0];
    assert_eq!(alice["otherPhones"], "81234567 (home)");
    assert_eq!(alice["email"], "alice@work.com (work) alice@me.com (own)");
    assert_eq!(alice["tags"][0], "friends");
}

#[test]
fn test_older_documents_without_optional_fields_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{ "persons": [ { "name": "Carol", "phone": "93456789",
             "email": "carol@example.com", "address": "3 Hill Lane" } ] }"#,
    )
    .unwrap();

    let book = JsonAddressBookStorage::new(&path).read().unwrap().unwrap();
    let carol = &book.persons()[0];
    assert!(carol.other_phones().is_empty());
    assert!(carol.tags().is_empty());
    assert_eq!(carol.meeting_count(), 0);
    assert!(!carol.is_flagged());
}

#[test]
fn test_missing_required_field_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{ "persons": [ { "name": "Carol", "email": "carol@example.com",
             "address": "3 Hill Lane" } ] }"#,
    )
    .unwrap();

    match JsonAddressBookStorage::new(&path).read() {
        Err(err @ StorageError::MissingField { .. }) => {
            assert_eq!(err.to_string(), "Person's phone field is missing!");
        }
        other => panic!("Expected MissingField error, got: {:?}", other),
    }
}

#[test]
fn test_duplicate_persons_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.json");
    let person = r#"{ "name": "Carol", "phone": "93456789",
                     "email": "carol@example.com", "address": "3 Hill Lane" }"#;
    fs::write(&path, format!(r#"{{ "persons": [ {}, {} ] }}"#, person, person)).unwrap();

    assert!(matches!(
        JsonAddressBookStorage::new(&path).read(),
        Err(StorageError::DuplicatePerson)
    ));
}
