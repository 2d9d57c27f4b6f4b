//! `passkeep get` — decrypt an entry and hand off its secret.

use std::time::Duration;

use crate::cli::{clipboard, prompt_master_password, store_path, Cli};
use crate::config::Settings;
use crate::errors::{PassKeepError, Result};
use crate::store::Store;

/// Execute the `get` command.
///
/// The secret goes to the clipboard with a timed clear by default;
/// `--show` prints it to stdout instead (for piped or headless use).
pub fn execute(cli: &Cli, name: &str, show_description: bool, show: bool) -> Result<()> {
    let path = store_path(cli)?;
    let store = Store::open(&path)?;

    // Fail on an unknown name before prompting for the password.
    if !store.contains(name) {
        return Err(PassKeepError::EntryNotFound(name.to_string()));
    }

    let master = prompt_master_password()?;
    store.verify_master(master.as_bytes())?;

    let entry = store.get_entry(name, master.as_bytes())?;

    if show_description {
        println!("Description: {}", &*entry.description);
    }

    if show {
        println!("{}", &*entry.secret);
    } else {
        let settings = Settings::load(&std::env::current_dir()?)?;
        clipboard::copy_and_clear(&entry.secret, Duration::from_secs(settings.clear_delay_secs))?;
    }

    Ok(())
}
