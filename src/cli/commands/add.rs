//! `passkeep add` — add a new entry to the store.

use crate::cli::output;
use crate::cli::{
    prompt_description, prompt_entry_secret, prompt_master_password, store_path, Cli,
};
use crate::errors::{PassKeepError, Result};
use crate::store::Store;

/// Execute the `add` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let path = store_path(cli)?;
    let mut store = Store::open(&path)?;

    // Reject duplicates before prompting for anything.
    if store.contains(name) {
        return Err(PassKeepError::DuplicateEntry(name.to_string()));
    }

    let master = prompt_master_password()?;
    store.verify_master(master.as_bytes())?;

    let description = prompt_description()?;
    let secret = prompt_entry_secret()?;

    store.add_entry(name, &description, &secret, master.as_bytes())?;

    output::success(&format!(
        "Added entry '{}' ({} total)",
        name,
        store.entry_count()
    ));

    Ok(())
}
