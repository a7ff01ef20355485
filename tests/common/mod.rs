//! Utility helpers shared across integration tests.

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Join table lines with `\n`, without a trailing newline.
pub fn joined(lines: &[String]) -> String {
    lines.join("\n")
}

/// Join cells with tabs to build one TSV line.
pub fn tsv_line(cells: &[&str]) -> String {
    cells.join("\t")
}
