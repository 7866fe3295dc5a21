//! List-mode implementation.
//!
//! Bypasses the rendering pipeline entirely: opens the emoji reference
//! page in the default browser and prints a confirmation line.

use crate::error::{FavemojiError, Result};
use crate::output::Printer;

/// Reference page listing the supported emoji aliases.
pub const EMOJI_CHEAT_SHEET_URL: &str = "https://www.webpagefx.com/tools/emoji-cheat-sheet/";

pub fn run(printer: &Printer) -> Result<()> {
    open_reference(printer, |url| {
        opener::open(url).map_err(|e| FavemojiError::Browser {
            message: e.to_string(),
        })
    })
}

/// Open the reference page through `launch`.
///
/// The launcher is a parameter so tests can observe the URL instead of
/// spawning a browser.
fn open_reference(printer: &Printer, launch: impl FnOnce(&str) -> Result<()>) -> Result<()> {
    printer.status("Opening", EMOJI_CHEAT_SHEET_URL);
    launch(EMOJI_CHEAT_SHEET_URL)?;

    println!("Opened the emoji cheat sheet in your browser");

    Ok(())
}
