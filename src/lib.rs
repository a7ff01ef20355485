//! Convert tables between Markdown and tab-separated values.
//!
//! Text with more pipes than tabs is read as a Markdown table and turned
//! into TSV that pastes cleanly into a spreadsheet. Anything else is read
//! as TSV and rendered as a padded Markdown table, recovering column
//! alignment from a dash separator row when one is present.

#[macro_use]
mod macros;

pub mod clipboard;
pub mod convert;
pub mod detect;
pub mod logging;
pub mod markdown;
pub mod render;
pub mod table;

pub use clipboard::{Clipboard, SystemClipboard, run_clipboard};
pub use convert::{convert, convert_to, split_input_lines};
pub use detect::{Format, detect_format};
pub use markdown::{markdown_to_tsv, split_md_cells};
pub use render::{format_row, pad_center, pad_left, pad_right, render_markdown, separator_line};
pub use table::{Alignment, MIN_COLUMN_WIDTH, Table, parse_tsv};
