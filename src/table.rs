//! Structured tables parsed from tab-separated text.
//!
//! A grid pasted from a spreadsheet may still carry the header separator
//! of the Markdown table it was originally copied from. When the second
//! line looks like one, its dash and colon markers decide the alignment of
//! every column and the line itself is dropped from the data rows.

use std::sync::LazyLock;

use regex::Regex;

/// Narrowest column a rendered table will use.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Dashes a cell needs before a row can count as a header separator.
const SEPARATOR_DASHES: usize = 3;

static CENTER_RE: LazyLock<Regex> = crate::lazy_regex!(r":-+:", "center alignment pattern");
static LEFT_RE: LazyLock<Regex> = crate::lazy_regex!(r":-+", "left alignment pattern");
static RIGHT_RE: LazyLock<Regex> = crate::lazy_regex!(r"-+:", "right alignment pattern");

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Infer the alignment encoded by a header separator cell.
    ///
    /// Patterns are tried in a fixed order: colons on both sides of a dash
    /// run, then a leading colon, then a trailing colon. The first match
    /// wins, so `:---:` is never read as left aligned.
    ///
    /// ```
    /// use mdtsv::Alignment;
    ///
    /// assert_eq!(Alignment::from_separator_cell(":---:"), Alignment::Center);
    /// assert_eq!(Alignment::from_separator_cell("---:"), Alignment::Right);
    /// ```
    #[must_use]
    pub fn from_separator_cell(cell: &str) -> Self {
        if CENTER_RE.is_match(cell) {
            Self::Center
        } else if LEFT_RE.is_match(cell) {
            Self::Left
        } else if RIGHT_RE.is_match(cell) {
            Self::Right
        } else {
            Self::None
        }
    }
}

/// A parsed table ready for rendering.
///
/// Every row holds exactly [`Table::column_count`] cells, and every column
/// width is at least [`MIN_COLUMN_WIDTH`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    alignments: Vec<Alignment>,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| c.matches('-').count() >= SEPARATOR_DASHES)
}

/// Pad or truncate `row` so it has exactly `len` cells.
fn normalize_row(mut row: Vec<String>, len: usize) -> Vec<String> {
    row.resize(len, String::new());
    row
}

impl Table {
    /// Build a table from rows that are already split into cells.
    ///
    /// The first row is the header. A trailing empty header cell is taken
    /// as a spreadsheet line terminator: every row is cut to one cell fewer
    /// than the header, so shorter rows keep all their cells. Returns `None`
    /// when `rows` is empty.
    #[must_use]
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Option<Self> {
        let header_len = rows.first()?.len();
        if rows[0].last().is_some_and(String::is_empty) {
            for row in &mut rows {
                row.truncate(header_len - 1);
            }
        }

        let column_count = rows[0].len();
        let has_separator = rows.len() >= 2 && is_separator_row(&rows[1]);

        let mut alignments = vec![Alignment::None; column_count];
        if has_separator {
            for (alignment, cell) in alignments.iter_mut().zip(&rows[1]) {
                *alignment = Alignment::from_separator_cell(cell);
            }
        }

        let mut iter = rows.into_iter();
        let header = iter.next().map(|h| normalize_row(h, column_count))?;
        if has_separator {
            iter.next();
        }
        let rows: Vec<Vec<String>> = iter.map(|r| normalize_row(r, column_count)).collect();

        let mut column_widths = vec![MIN_COLUMN_WIDTH; column_count];
        for row in std::iter::once(&header).chain(&rows) {
            for (width, cell) in column_widths.iter_mut().zip(row) {
                *width = (*width).max(char_len(cell));
            }
        }

        Some(Self {
            header,
            rows,
            column_widths,
            alignments,
        })
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, excluding the header and any header separator.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    #[must_use]
    pub fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }
}

/// Parse tab-separated lines into a [`Table`].
///
/// Lines are expected to be free of carriage returns. An empty slice yields
/// a table with no columns.
#[must_use]
pub fn parse_tsv(lines: &[String]) -> Table {
    let rows = lines
        .iter()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect();
    Table::from_rows(rows).unwrap_or_default()
}
