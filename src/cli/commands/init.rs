//! `passkeep init` — create a new password store.

use crate::cli::output;
use crate::cli::{prompt_new_master_password, store_path, Cli};
use crate::errors::{PassKeepError, Result};
use crate::store::Store;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = store_path(cli)?;

    // Store::init re-checks atomically via create_new; this early check
    // just gives a friendlier message before prompting for a password.
    if path.exists() {
        output::tip("Use `passkeep add <name>` to add entries to the existing store.");
        return Err(PassKeepError::StoreAlreadyExists(path));
    }

    let (password, confirmation) = prompt_new_master_password()?;
    Store::init(&path, password.as_bytes(), confirmation.as_bytes())?;

    output::success(&format!(
        "Initialized password store at {}",
        path.display()
    ));
    output::tip("Run `passkeep add <name>` to add your first entry.");

    Ok(())
}
