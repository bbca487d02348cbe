//! Interactive edit dialog.
//!
//! Presents the selected record's name and year as editable fields: an empty
//! answer keeps the seeded value, and a final confirmation applies or
//! discards the pair. The dialog only collects input; the watchlist service
//! applies the result, so cancelling changes nothing.
//!
//! # Usage
//!
//! ```bash
//! cinelog edit 2
//! ```

// Allow print_stdout/stderr in CLI module (consistent with main.rs)
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use crate::models::Movie;
use crate::services::WatchlistService;
use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Outcome of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed a replacement pair.
    Save {
        /// Replacement name.
        name: String,
        /// Replacement year.
        year: String,
    },
    /// The user cancelled; nothing is applied.
    Cancelled,
}

/// Executes the edit command.
///
/// # Errors
///
/// Returns `IndexOutOfRange` when `index` does not address the collection,
/// a validation error when the confirmed pair is rejected, or a storage
/// error from persisting.
pub fn execute(service: &mut WatchlistService, index: usize) -> Result<()> {
    let Some(current) = service.movies().get(index).cloned() else {
        return Err(Error::IndexOutOfRange {
            index,
            len: service.len(),
        });
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let outcome = run_dialog(&current, index, &mut input)?;

    match outcome {
        DialogOutcome::Save { name, year } => {
            service.update(index, &name, &year)?;
            println!("Updated {index}: {name} ({year})");
        },
        DialogOutcome::Cancelled => {
            println!("Cancelled.");
        },
    }

    Ok(())
}

/// Runs the dialog over the given reader and returns the collected pair.
///
/// # Errors
///
/// Returns an error when terminal I/O fails.
pub fn run_dialog(
    current: &Movie,
    index: usize,
    input: &mut impl BufRead,
) -> Result<DialogOutcome> {
    println!("Editing {index}: {current}");

    let name = prompt_field(input, "Movie name", &current.name)?;
    let year = prompt_field(input, "Release year", &current.year)?;

    print!("Save changes? [Y/n] ");
    flush_stdout()?;

    let mut answer = String::new();
    read_line(input, &mut answer)?;
    let answer = answer.trim();

    if answer.is_empty() || answer.eq_ignore_ascii_case("y") {
        Ok(DialogOutcome::Save { name, year })
    } else {
        Ok(DialogOutcome::Cancelled)
    }
}

/// Prompts for one field; an empty answer keeps the seeded value.
fn prompt_field(input: &mut impl BufRead, label: &str, seed: &str) -> Result<String> {
    print!("{label} [{seed}]: ");
    flush_stdout()?;

    let mut line = String::new();
    read_line(input, &mut line)?;
    Ok(resolve_answer(&line, seed))
}

/// Applies the keep-on-empty rule to one raw input line.
fn resolve_answer(line: &str, seed: &str) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        seed.to_string()
    } else {
        trimmed.to_string()
    }
}

fn flush_stdout() -> Result<()> {
    io::stdout().flush().map_err(|e| Error::OperationFailed {
        operation: "flush_stdout".to_string(),
        cause: e.to_string(),
    })
}

fn read_line(input: &mut impl BufRead, buf: &mut String) -> Result<()> {
    input
        .read_line(buf)
        .map(|_| ())
        .map_err(|e| Error::OperationFailed {
            operation: "read_stdin".to_string(),
            cause: e.to_string(),
        })
}
