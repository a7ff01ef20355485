use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use mdtsv::{SystemClipboard, convert, logging, run_clipboard};

#[derive(Parser)]
#[command(version, about = "Convert the clipboard table between Markdown and TSV")]
struct Cli {
    /// Read the table from stdin and print the result instead of using the
    /// clipboard
    #[arg(long = "stdin")]
    stdin: bool,
    /// Append diagnostics to this file instead of the temporary directory
    #[arg(long = "log-file", env = "MDTSV_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn convert_stdin() -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    tracing::debug!("Read from stdin: \n{input}");
    let output = convert(&input);
    tracing::debug!("Writing to stdout: \n{output}");
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Entry point for the clipboard table converter.
///
/// Without arguments the clipboard is read, converted and written back. A
/// Markdown table becomes TSV; a TSV grid becomes a formatted Markdown
/// table.
///
/// # Examples
///
/// ```sh
/// # Flip the table currently on the clipboard
/// mdtsv
///
/// # Convert a file through a pipe
/// mdtsv --stdin < table.tsv
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    let _guard = logging::init(&log_path);

    if cli.stdin {
        return convert_stdin();
    }

    let mut clipboard = SystemClipboard::new()?;
    run_clipboard(&mut clipboard, &mut io::stdout().lock())?;
    Ok(())
}
