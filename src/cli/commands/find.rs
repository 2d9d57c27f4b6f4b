//! `passkeep find` — search entry names for a keyword.
//!
//! Works on names only, so no master password is required. Invoked with
//! no keyword it lists every entry in the store.

use crate::cli::output;
use crate::cli::{store_path, Cli};
use crate::errors::Result;
use crate::store::Store;

/// Execute the `find` command.
pub fn execute(cli: &Cli, keyword: &str) -> Result<()> {
    let path = store_path(cli)?;
    let store = Store::open(&path)?;

    let names = store.find(keyword);
    output::print_names_table(&names);

    Ok(())
}
