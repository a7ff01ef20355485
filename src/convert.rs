//! Convert a table in whichever direction its format calls for.

use std::io::{self, Write};

use crate::{
    detect::{Format, detect_format},
    markdown::markdown_to_tsv,
    render::render_markdown,
    table::parse_tsv,
};

/// Split `input` into lines with every carriage return removed.
///
/// A single trailing empty line, left behind by a final newline, is
/// dropped.
#[must_use]
pub fn split_input_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = input.replace('\r', "").split('\n').map(str::to_string).collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Convert Markdown to TSV or TSV to Markdown, depending on `input`.
///
/// Empty input converts to an empty string.
///
/// ```
/// assert_eq!(mdtsv::convert("|Tables|Are|Cool|"), "Tables\tAre\tCool");
/// assert_eq!(
///     mdtsv::convert("a\tb"),
///     "| a   | b   |\n|-----|-----|",
/// );
/// ```
#[must_use]
pub fn convert(input: &str) -> String {
    let lines = split_input_lines(input);
    if lines.is_empty() {
        return String::new();
    }
    match detect_format(input) {
        Format::Markdown => markdown_to_tsv(&lines),
        Format::Tsv => render_markdown(&parse_tsv(&lines)),
    }
}

/// Convert `input` and write the result to `out`.
///
/// Nothing is written for empty input.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn convert_to<W: Write + ?Sized>(input: &str, out: &mut W) -> io::Result<()> {
    let converted = convert(input);
    if converted.is_empty() {
        return Ok(());
    }
    out.write_all(converted.as_bytes())
}
