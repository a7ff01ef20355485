//! Markdown to TSV conversion.
//!
//! Each line loses one outer pipe on either side, is split on the
//! remaining pipes and has its cells trimmed. Separator rows are kept as
//! ordinary cells so a later conversion back to Markdown can recover the
//! column alignment.

/// Split one Markdown table line into trimmed cells.
///
/// Only a pipe at the very first or very last position is treated as an
/// outer border. Empty cells between adjacent pipes are kept.
#[must_use]
pub fn split_md_cells(line: &str) -> Vec<&str> {
    let s = line.strip_prefix('|').unwrap_or(line);
    let s = s.strip_suffix('|').unwrap_or(s);
    s.split('|').map(|c| c.trim_matches([' ', '\t'])).collect()
}

/// Convert Markdown table lines to tab-separated text.
///
/// Rows are joined with `\n`; no trailing newline is added.
#[must_use]
pub fn markdown_to_tsv(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| split_md_cells(line).join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
