//! Clipboard round trip: read a table, convert it, write it back.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::convert::convert;

/// Text clipboard access.
pub trait Clipboard {
    /// Read the full clipboard contents as text.
    ///
    /// # Errors
    /// Returns an error if the clipboard is unavailable or holds no text.
    fn read_text(&mut self) -> Result<String>;

    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns an error if the clipboard cannot be written.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, backed by [`arboard`].
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    ///
    /// # Errors
    /// Returns an error if no clipboard is available, for example on a
    /// headless machine.
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("failed to open the system clipboard")?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.inner.get_text()?)
    }

    /// On Linux the selection belongs to this process, so the write blocks
    /// until another client takes it over.
    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        Ok(self.inner.set().wait().text(text)?)
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<()> {
        Ok(self.inner.set_text(text)?)
    }
}

/// Convert the table on `clipboard` in place and return what was written.
///
/// The clipboard is read once and written once. Either failure aborts the
/// run; nothing is retried. `Start` and `Done` are written to `progress`
/// around the round trip.
///
/// # Errors
/// Returns an error if reading or writing the clipboard fails, or if
/// `progress` cannot be written.
pub fn run_clipboard<C, W>(clipboard: &mut C, progress: &mut W) -> Result<String>
where
    C: Clipboard + ?Sized,
    W: Write + ?Sized,
{
    writeln!(progress, "Start")?;
    let input = match clipboard.read_text() {
        Ok(text) => text,
        Err(err) => {
            error!("Failed to read from clipboard: {err:#}");
            return Err(err.context("failed to read from clipboard"));
        }
    };
    debug!("Read from clipboard: \n{input}");

    let output = convert(&input);

    debug!("Writing to clipboard: \n{output}");
    clipboard
        .write_text(&output)
        .context("failed to write to clipboard")?;
    writeln!(progress, "Done")?;
    Ok(output)
}
