//! CLI module — Clap argument parser, prompt helpers, and command
//! implementations.

pub mod clipboard;
pub mod commands;
pub mod output;

use std::io::{self, IsTerminal};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassKeepError, Result};
use crate::generator;

/// PassKeep CLI: local encrypted password store.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Local encrypted password store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store file to use (default: passdb, or store_file from .passkeep.toml)
    #[arg(long, global = true)]
    pub store: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new password store
    Init,

    /// Add an entry with the given name
    Add {
        /// Entry name (e.g. github)
        name: String,
    },

    /// Decrypt an entry and copy its secret to the clipboard
    Get {
        /// Entry name
        name: String,

        /// Also show the entry's description
        #[arg(short = 'd', long)]
        description: bool,

        /// Print the secret to stdout instead of the clipboard
        #[arg(long)]
        show: bool,
    },

    /// Remove an entry
    Rm {
        /// Entry name
        name: String,
    },

    /// Search entry names for a keyword (no keyword lists everything)
    Find {
        /// Substring to match against entry names
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Generate a random password
    Gen {
        /// Password length
        #[arg(default_value_t = generator::DEFAULT_LENGTH)]
        length: usize,

        /// Print the password to stdout instead of the clipboard
        #[arg(long)]
        show: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSKEEP_PASSWORD` env var (CI/scripting)
/// 2. Piped stdin (one line)
/// 3. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if !io::stdin().is_terminal() {
        return read_stdin_line();
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter the master password")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password and its confirmation (used by `init`).
///
/// Both values are returned; the mismatch check lives in the store layer so
/// it is enforced for every caller, interactive or not. Respects
/// `PASSKEEP_PASSWORD` for scripted usage (confirmation is implied there).
pub fn prompt_new_master_password() -> Result<(Zeroizing<String>, Zeroizing<String>)> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            return Ok((Zeroizing::new(pw.clone()), Zeroizing::new(pw)));
        }
    }

    if !io::stdin().is_terminal() {
        let password = read_stdin_line()?;
        let confirmation = read_stdin_line()?;
        return Ok((password, confirmation));
    }

    let password = dialoguer::Password::new()
        .with_prompt("Enter the master password")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;
    let confirmation = dialoguer::Password::new()
        .with_prompt("Verify the master password")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;

    Ok((Zeroizing::new(password), Zeroizing::new(confirmation)))
}

/// Prompt for an entry's description (may be empty).
pub fn prompt_description() -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        return read_stdin_line();
    }

    let description = dialoguer::Input::<String>::new()
        .with_prompt("Enter description")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassKeepError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(description))
}

/// Prompt for the secret value of a new entry.
///
/// Interactive use confirms the value; piped input reads a single line.
pub fn prompt_entry_secret() -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        return read_stdin_line();
    }

    let secret = dialoguer::Password::new()
        .with_prompt("Enter the password")
        .with_confirmation("Verify the password", "The passwords do not match, try again")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// Read one line from piped stdin, stripping the trailing newline in place
/// so no unwiped copy of the input is left behind.
fn read_stdin_line() -> Result<Zeroizing<String>> {
    let mut buf = Zeroizing::new(String::new());
    io::stdin().read_line(&mut buf)?;
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

/// Build the full path to the store file from the CLI arguments.
///
/// `--store <FILE>` wins; otherwise the `store_file` setting from
/// `.passkeep.toml` (default `passdb`), resolved against the current
/// working directory.
pub fn store_path(cli: &Cli) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    match &cli.store {
        Some(file) => Ok(cwd.join(file)),
        None => {
            let settings = Settings::load(&cwd)?;
            Ok(settings.store_path(&cwd))
        }
    }
}
