use super::column::Alignment;
use super::{Column, ReportRow};
use crate::Result;
use chrono::{DateTime, Local};
use core::fmt::Write;
use owo_colors::OwoColorize;
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Format of the creation time printed below each table
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the download report of one user as an aligned text table.
///
/// The block starts with a blank line, a title and a link to the user's profile,
/// followed by the table framed by dashed separator rows and a creation timestamp.
pub fn generate<W: Write>(
    user: &str,
    profile_url: &str,
    rows: &[ReportRow],
    now: DateTime<Local>,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    let widths = column_widths(rows);
    let separator = separator_row(&widths);

    let title = format!("Download count of public package published by {user}");
    let header = format_row(&widths, |column| column.label().into());

    writeln!(writer)?;
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    writeln!(writer, "({profile_url})")?;
    writeln!(writer)?;

    writeln!(writer, "{separator}")?;
    if use_colors {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }
    writeln!(writer, "{separator}")?;
    for row in rows {
        writeln!(writer, "{}", format_row(&widths, |column| row.cell(column)))?;
    }
    writeln!(writer, "{separator}")?;

    writeln!(writer, "This list was created at {}", now.format(TIMESTAMP_FORMAT))?;

    Ok(())
}

/// Width of every column: the longest of its header label and its cells, in characters.
pub fn column_widths(rows: &[ReportRow]) -> Vec<(Column, usize)> {
    Column::iter()
        .map(|column| {
            let widest_cell = rows.iter().map(|row| row.cell(column).chars().count()).max().unwrap_or(0);
            (column, widest_cell.max(column.label().chars().count()))
        })
        .collect()
}

/// A row of dashes spanning each column
pub fn separator_row(widths: &[(Column, usize)]) -> String {
    widths.iter().map(|&(_, width)| "-".repeat(width)).collect::<Vec<_>>().join(" ")
}

fn format_row<'a>(widths: &[(Column, usize)], cell: impl Fn(Column) -> Cow<'a, str>) -> String {
    let line = widths
        .iter()
        .map(|&(column, width)| {
            let text = cell(column);
            match column.alignment() {
                Alignment::Left => format!("{text:<width$}"),
                Alignment::Right => format!("{text:>width$}"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    line.trim_end().to_string()
}
