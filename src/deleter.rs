//! Interactive cleanup pass over the ranked results.
//!
//! Files are moved to the Recycle Bin, never permanently deleted, so a wrong
//! answer is always recoverable from the bin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::SiftError;
use crate::scanner::{format_size, FileRecord};

/// Counts for the closing summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSummary {
    pub trashed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walks the ranked list and asks about each file in turn.
pub struct InteractiveDeleter<'a> {
    diag: &'a dyn Diagnostics,
    terminal_width: usize,
}

impl<'a> InteractiveDeleter<'a> {
    pub fn new(diag: &'a dyn Diagnostics, terminal_width: usize) -> Self {
        Self {
            diag,
            terminal_width,
        }
    }

    /// Prompt for every record: `y` trashes, `q` stops, anything else
    /// skips. A trash failure is reported and the loop moves on. Answers
    /// come from `input` so the loop stays scriptable; production passes
    /// locked stdin.
    pub fn run(
        &self,
        records: &[FileRecord],
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<DeleteSummary> {
        let mut summary = DeleteSummary::default();
        if records.is_empty() {
            return Ok(summary);
        }

        writeln!(output, "\nStarting interactive cleanup.")?;
        writeln!(
            output,
            "Answer 'y' to move a file to the recycle bin, 'n' or Enter to skip, 'q' to stop."
        )?;

        for (index, record) in records.iter().enumerate() {
            if !record.path.exists() {
                writeln!(
                    output,
                    "> File '{}' no longer exists, skipping.",
                    record.path.display()
                )?;
                summary.skipped += 1;
                continue;
            }

            write!(output, "{}", self.prompt(index + 1, record))?;
            output.flush()?;

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                writeln!(output, "\nCancelled.")?;
                break;
            }

            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => match move_to_trash(&record.path) {
                    Ok(()) => {
                        writeln!(output, "> Moved to the recycle bin.")?;
                        summary.trashed += 1;
                    }
                    Err(err) => {
                        self.diag.warn(&err.to_string());
                        writeln!(output, "> {err}")?;
                        summary.failed += 1;
                    }
                },
                "q" | "quit" => {
                    writeln!(output, "> Stopping cleanup.")?;
                    break;
                }
                _ => {
                    writeln!(output, "> Skipped.")?;
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    fn prompt(&self, number: usize, record: &FileRecord) -> String {
        let size_text = format_size(record.size as i64);
        // Reserve the prompt's own characters before fitting the path in
        let skeleton = format!("[{number}] Move {size_text} file ''? [y/N/q]: ");
        let budget = self.terminal_width.saturating_sub(skeleton.chars().count());
        let path_text = record.path.display().to_string();
        let shown = truncate_right(&path_text, budget);
        format!("[{number}] Move {size_text} file '{shown}'? [y/N/q]: ")
    }
}

fn truncate_right(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars || max_chars <= 15 {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{head}...")
}

fn move_to_trash(path: &Path) -> Result<(), SiftError> {
    trash::delete(path).map_err(|source| SiftError::Trash {
        path: path.to_path_buf(),
        source,
    })
}
