//! CLI interface for bin32.
//!
//! Two ways in:
//! - no arguments: an interactive prompt loop, re-prompting until the user
//!   answers the continue question with anything other than 'Y'
//! - one or more positional values: encode each one and exit (scriptable)
//!
//! All input validation happens here. The encoder itself only ever sees
//! values already checked against [`MAX_VALUE`].

use crate::encoder::{encode_binary, MAX_VALUE};
use crate::weights::{build_weight_table, WORD_BITS};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, IsTerminal, Write};

/// Fixed rejection message, shown for unparseable and out-of-range input alike.
pub const INVALID_INPUT_MSG: &str =
    "Invalid number entered. (positive number from 0 to 2,147,483,647)";

#[derive(Parser)]
#[command(name = "bin32")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Show any number from 0 to 2,147,483,647 as 32-bit binary")]
#[command(
    long_about = "bin32 - 32-bit binary representation calculator\n\n\
    Converts non-negative integers up to 2,147,483,647 (i32 max) into their\n\
    full-width binary form, spaced every four bits for readability.\n\n\
    With no arguments, bin32 runs an interactive prompt loop. With positional\n\
    values it encodes each one and exits, which is handy in scripts:\n\n\
    Examples:\n\
      bin32\n\
      bin32 255\n\
      bin32 0 5 2147483647"
)]
pub struct Cli {
    /// Values to encode non-interactively, one result per line
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,

    /// Keep previous output on screen between interactive iterations
    #[arg(long)]
    pub no_clear: bool,
}

/// Why a raw input line was rejected. Both kinds surface to the user as the
/// same fixed message; the distinction only matters to tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not a valid non-negative integer literal.
    Parse,
    /// Parsed fine but exceeds [`MAX_VALUE`].
    Range,
}

/// Parse one line of user input into an encodable value.
pub fn parse_value(input: &str) -> Result<u32, InputError> {
    let value: u32 = input.trim().parse().map_err(|_| InputError::Parse)?;
    if value > MAX_VALUE {
        return Err(InputError::Range);
    }
    Ok(value)
}

pub fn run() -> io::Result<()> {
    let cli = Cli::parse();

    // Built once and reused for every encode; the table is read-only.
    let weights = build_weight_table(WORD_BITS)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if cli.values.is_empty() {
        run_interactive(&weights, cli.no_clear)
    } else {
        run_once(&weights, &cli.values)
    }
}

/// Encode each positional value, or complain on stderr and fail at the end.
fn run_once(weights: &[u32], values: &[String]) -> io::Result<()> {
    let mut rejected = 0usize;

    for raw in values {
        match parse_value(raw) {
            Ok(value) => {
                let binary = encode_binary(value, weights)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                println!("{value} as binary is: {binary}");
            }
            Err(_) => {
                eprintln!("{raw}: {INVALID_INPUT_MSG}");
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{rejected} of {} values rejected", values.len()),
        ));
    }
    Ok(())
}

/// Prompt/encode/ask-to-continue loop, clearing the screen between rounds.
fn run_interactive(weights: &[u32], no_clear: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let clear_between = !no_clear && io::stdout().is_terminal();

    loop {
        print!("Enter any positive number from 0 to 2,147,483,647: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed
        };

        match parse_value(&line) {
            Ok(value) => {
                let binary = encode_binary(value, weights)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                println!("{value} as binary is: {binary}");
            }
            Err(_) => println!("{INVALID_INPUT_MSG}"),
        }

        print!("Press 'Y' to continue or 'N' to exit.");
        io::stdout().flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if !answer.trim_start().starts_with(['y', 'Y']) {
            break;
        }

        if clear_between {
            crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_value("0"), Ok(0));
        assert_eq!(parse_value("255"), Ok(255));
        assert_eq!(parse_value("  42\n"), Ok(42));
        assert_eq!(parse_value("2147483647"), Ok(2_147_483_647));
    }

    #[test]
    fn rejects_garbage_as_parse_errors() {
        assert_eq!(parse_value(""), Err(InputError::Parse));
        assert_eq!(parse_value("twelve"), Err(InputError::Parse));
        assert_eq!(parse_value("-1"), Err(InputError::Parse));
        assert_eq!(parse_value("12.5"), Err(InputError::Parse));
        // Too big for u32 entirely: still a parse failure, same message.
        assert_eq!(parse_value("99999999999"), Err(InputError::Parse));
    }

    #[test]
    fn rejects_values_above_i32_max_as_range_errors() {
        assert_eq!(parse_value("2147483648"), Err(InputError::Range));
        assert_eq!(parse_value("4294967295"), Err(InputError::Range));
    }
}
