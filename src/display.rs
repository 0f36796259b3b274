//! Results rendering: a fixed-width table for humans, JSON for scripts.

use std::io::{self, Write};

use crate::scanner::{format_size, FileRecord, Ranked};

/// Columns available for output, with a fallback when there is no terminal.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(80)
}

/// Print the ranked list as a table sized to `width` columns.
pub fn print_results(ranked: &Ranked, width: usize, out: &mut dyn Write) -> io::Result<()> {
    if ranked.entries.is_empty() {
        writeln!(out, "\nNo files above the size threshold were found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "\nFound {} file(s) above the size threshold. Showing the top {}:\n",
        ranked.total_found,
        ranked.entries.len()
    )?;

    // '#' and size columns are fixed; the path column takes the rest.
    let fixed = 4 + 12;
    let path_width = width.saturating_sub(fixed + 1);

    writeln!(out, "{:<4}{:<12}{}", "#", "Size", "Path")?;
    writeln!(
        out,
        "{}{}{}",
        "-".repeat(4),
        "-".repeat(12),
        "-".repeat(if path_width > 10 { path_width } else { 64 })
    )?;

    for (index, record) in ranked.entries.iter().enumerate() {
        let label = format!("{}.", index + 1);
        let path_text = record.path.display().to_string();
        writeln!(
            out,
            "{:<4}{:<12}{}",
            label,
            format_size(record.size as i64),
            middle_truncate(&path_text, path_width)
        )?;
    }

    Ok(())
}

/// Print records as a JSON array.
pub fn print_json(records: &[FileRecord], out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)
}

/// Keep both ends of an over-long path, eliding the middle. Narrow budgets
/// leave the text alone rather than mangle it.
pub fn middle_truncate(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars || max_chars <= 15 {
        return text.to_string();
    }
    let half = (max_chars - 3) / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}
