//! Markdown rendering for parsed tables.
//!
//! Padding helpers are named after where the text ends up: [`pad_left`]
//! left-justifies by appending spaces and [`pad_right`] right-justifies by
//! prepending them. Widths are measured in characters.

use crate::table::{Alignment, Table};

fn padding(s: &str, width: usize) -> usize {
    width.saturating_sub(s.chars().count())
}

/// Left-justify `s` within `width` characters.
#[must_use]
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(padding(s, width)))
}

/// Right-justify `s` within `width` characters.
#[must_use]
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{s}", " ".repeat(padding(s, width)))
}

/// Centre `s` within `width` characters, putting the odd space on the left.
#[must_use]
pub fn pad_center(s: &str, width: usize) -> String {
    let total = padding(s, width);
    let left = total.div_ceil(2);
    format!("{}{s}{}", " ".repeat(left), " ".repeat(total - left))
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::None | Alignment::Left => pad_left(cell, width),
        Alignment::Center => pad_center(cell, width),
        Alignment::Right => pad_right(cell, width),
    }
}

/// Format one row of `table` as `| a | b |`, padding each cell to its
/// column width and alignment.
///
/// Cells missing from a short row render as blanks; cells beyond the
/// table's column count are ignored.
#[must_use]
pub fn format_row(table: &Table, row: &[String]) -> String {
    let cells: Vec<String> = table
        .column_widths()
        .iter()
        .zip(table.alignments())
        .enumerate()
        .map(|(i, (&width, &alignment))| {
            let cell = row.get(i).map_or("", String::as_str);
            pad_cell(cell, width, alignment)
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

/// Build the header separator line for `table`.
///
/// Each column gets a run of dashes as wide as the column, bordered by one
/// character on each side: a colon marks an aligned edge, a dash a plain
/// one.
#[must_use]
pub fn separator_line(table: &Table) -> String {
    let cells: Vec<String> = table
        .column_widths()
        .iter()
        .zip(table.alignments())
        .map(|(&width, alignment)| {
            let (open, close) = match alignment {
                Alignment::None => ('-', '-'),
                Alignment::Left => (':', '-'),
                Alignment::Center => (':', ':'),
                Alignment::Right => ('-', ':'),
            };
            format!("{open}{}{close}", "-".repeat(width))
        })
        .collect();
    format!("|{}|", cells.join("|"))
}

/// Render `table` as a Markdown table.
///
/// The output never ends with a newline.
#[must_use]
pub fn render_markdown(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows().len() + 2);
    lines.push(format_row(table, table.header()));
    lines.push(separator_line(table));
    lines.extend(table.rows().iter().map(|row| format_row(table, row)));
    lines.join("\n")
}

impl Table {
    /// Render this table as Markdown. See [`render_markdown`].
    #[must_use]
    pub fn to_markdown(&self) -> String {
        render_markdown(self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::table::parse_tsv;

    fn table(text: &str) -> Table {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        parse_tsv(&lines)
    }

    #[rstest]
    #[case("ab", 5, "ab   ")]
    #[case("abcdef", 3, "abcdef")]
    #[case("", 3, "   ")]
    #[case("é", 3, "é  ")]
    fn pads_left_justified(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_left(s, width), expected);
    }

    #[rstest]
    #[case("ab", 5, "   ab")]
    #[case("abcdef", 3, "abcdef")]
    fn pads_right_justified(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_right(s, width), expected);
    }

    #[rstest]
    #[case("ab", 6, "  ab  ")]
    #[case("ab", 5, "  ab ")]
    #[case("z", 6, "   z  ")]
    #[case("", 3, "   ")]
    #[case("wide", 2, "wide")]
    fn pads_centered(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_center(s, width), expected);
    }

    #[test]
    fn separator_markers_follow_alignment() {
        let t = table("a\tb\tc\td\n---\t:---\t:---:\t---:");
        assert_eq!(separator_line(&t), "|-----|:----|:---:|----:|");
    }

    #[test]
    fn header_only_has_no_trailing_newline() {
        let t = table("Tables\tAre\tCool");
        assert_eq!(
            render_markdown(&t),
            "| Tables | Are | Cool |\n|--------|-----|------|"
        );
    }

    #[test]
    fn short_row_renders_blank_cells() {
        let t = table("a\tb\n1\t2");
        let row = vec!["x".to_string()];
        assert_eq!(format_row(&t, &row), "| x   |     |");
    }

    #[test]
    fn to_markdown_matches_free_function() {
        let t = table("a\tb\n1\t2");
        assert_eq!(t.to_markdown(), render_markdown(&t));
        assert_eq!(t.to_markdown(), "| a   | b   |\n|-----|-----|\n| 1   | 2   |");
    }
}
