//! Output formatting shared by commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a boxed table header with the given column titles.
pub fn print_header(columns: &[(&str, usize)]) {
    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = columns.iter().map(|(_, w)| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    println!("{}", rule("┌", "┬", "┐"));
    let titles: Vec<String> = columns
        .iter()
        .map(|(title, w)| format!(" {:<width$} ", title, width = w))
        .collect();
    println!("│{}│", titles.join("│"));
    println!("{}", rule("├", "┼", "┤"));
}

/// Prints one table row; cells are right-aligned to the column widths.
pub fn print_row(columns: &[(&str, usize)], cells: &[String]) {
    let padded: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|((_, w), cell)| format!(" {:>width$} ", cell, width = w))
        .collect();
    println!("│{}│", padded.join("│"));
}

/// Prints the closing rule of a table.
pub fn print_footer(columns: &[(&str, usize)]) {
    let segments: Vec<String> = columns.iter().map(|(_, w)| "─".repeat(w + 2)).collect();
    println!("└{}┘", segments.join("┴"));
}

/// Formats a number with fixed decimals.
pub fn num(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
