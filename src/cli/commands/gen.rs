//! `passkeep gen` — generate a random password.

use std::time::Duration;

use crate::cli::clipboard;
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::generate_password;

/// Execute the `gen` command.
///
/// The generated password follows the same clipboard handoff as `get`;
/// `--show` prints it instead.
pub fn execute(length: usize, show: bool) -> Result<()> {
    let password = generate_password(length)?;

    if show {
        println!("{}", &*password);
    } else {
        let settings = Settings::load(&std::env::current_dir()?)?;
        clipboard::copy_and_clear(&password, Duration::from_secs(settings.clear_delay_secs))?;
    }

    Ok(())
}
