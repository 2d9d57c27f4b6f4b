//! Clipboard handoff with timed clearing.
//!
//! A decrypted secret is copied to the system clipboard and cleared again
//! after a delay or as soon as the user presses Enter, whichever happens
//! first. A helper thread blocks on stdin and signals a channel; the
//! caller waits on that channel with a timeout. Only the caller ever
//! clears the clipboard, so the clear runs exactly once no matter which
//! side of the race fires.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use arboard::Clipboard;

use crate::cli::output;
use crate::errors::{PassKeepError, Result};

/// Copy `secret` to the clipboard, then clear it after `clear_delay` or
/// on Enter, whichever comes first.
pub fn copy_and_clear(secret: &str, clear_delay: Duration) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| PassKeepError::ClipboardError(e.to_string()))?;

    clipboard
        .set_text(secret)
        .map_err(|e| PassKeepError::ClipboardError(e.to_string()))?;

    output::info(&format!(
        "Secret copied to clipboard. It will be cleared after {} seconds, or press Enter to clear now.",
        clear_delay.as_secs()
    ));

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });

    // Ok means the user pressed Enter, Err means the timeout elapsed.
    // Either way, fall through to the single clearing site below.
    let _ = rx.recv_timeout(clear_delay);

    clipboard
        .set_text("")
        .map_err(|e| PassKeepError::ClipboardError(e.to_string()))?;
    output::info("Clipboard cleared.");

    Ok(())
}
