//! One step of an interactive session: parse, execute, persist.

use crate::book::Model;
use crate::commands::{parse_command, CommandResult};
use crate::error::{CommandError, StorageResult};
use crate::storage::AddressBookStorage;

/// Parse and run one input line, then save when `autosave` is on and the
/// book changed.
///
/// A failed save is logged, not returned: the command itself succeeded. The
/// model stays modified so the next save retries it.
pub fn handle_line(
    model: &mut Model,
    storage: &dyn AddressBookStorage,
    line: &str,
    autosave: bool,
) -> Result<CommandResult, CommandError> {
    let result = parse_command(line).and_then(|command| command.execute(model));

    if autosave {
        if let Err(e) = save_if_modified(model, storage) {
            tracing::error!("Failed to save address book: {}", e);
        }
    }
    result
}

/// Save the book if it changed since the last successful save.
///
/// Returns whether anything was written. The modified flag is only cleared
/// once the storage accepted the book.
pub fn save_if_modified(
    model: &mut Model,
    storage: &dyn AddressBookStorage,
) -> StorageResult<bool> {
    if !model.is_modified() {
        return Ok(false);
    }

    storage.save(model.address_book())?;
    model.mark_saved();
    tracing::debug!("Address book saved to {}", storage.path().display());
    Ok(true)
}
