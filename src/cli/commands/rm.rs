//! `passkeep rm` — remove an entry from the store.

use crate::cli::output;
use crate::cli::{prompt_master_password, store_path, Cli};
use crate::errors::{PassKeepError, Result};
use crate::store::Store;

/// Execute the `rm` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let path = store_path(cli)?;
    let mut store = Store::open(&path)?;

    if !store.contains(name) {
        return Err(PassKeepError::EntryNotFound(name.to_string()));
    }

    let master = prompt_master_password()?;
    store.verify_master(master.as_bytes())?;

    store.remove_entry(name)?;

    output::success(&format!(
        "Removed entry '{}' ({} remaining)",
        name,
        store.entry_count()
    ));

    Ok(())
}
