//! Guess which way a table should be converted.

use std::fmt;

/// The representation a piece of clipboard text is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pipe-delimited Markdown; converted to TSV.
    Markdown,
    /// Tab-separated values; converted to Markdown.
    Tsv,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Markdown => "markdown",
            Self::Tsv => "tsv",
        })
    }
}

/// Classify `input` by comparing how many pipes and tabs it contains.
///
/// More pipes than tabs means Markdown; anything else, including a tie, is
/// treated as TSV. A TSV grid whose cells are full of literal pipes will be
/// misread as Markdown.
#[must_use]
pub fn detect_format(input: &str) -> Format {
    let (pipes, tabs) = input.chars().fold((0usize, 0usize), |(p, t), ch| match ch {
        '|' => (p + 1, t),
        '\t' => (p, t + 1),
        _ => (p, t),
    });
    if pipes > tabs {
        Format::Markdown
    } else {
        Format::Tsv
    }
}
