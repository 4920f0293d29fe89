//! Interactive console front end.
//!
//! Walks through one transmission: prompts for the data and modulus, prints
//! the sender checksum, prompts for the data as received, then prints the
//! receiver checksum and the verdict.
//!
//! Input and output are generic so the whole exchange can be driven from a
//! byte buffer in tests.

use std::io::{BufRead, Write};

use crate::checksum::{generate_checksum, verify, VerificationOutcome};
use crate::error::ConsoleError;

/// Run one console session.
///
/// Returns `Ok(None)` when the user enters a zero modulus, which ends the
/// session early. Lines that are not integers are re-prompted.
///
/// # Errors
///
/// Returns [`ConsoleError::UnexpectedEof`] if input ends before all three
/// values are entered, or [`ConsoleError::Io`] on read/write failure.
pub fn run_console<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<VerificationOutcome>, ConsoleError> {
    let sent_data = prompt_int(input, output, "Enter data to send: ", "data to send")?;

    let modulus = prompt_int(
        input,
        output,
        "Enter key/modulus (non-zero integer): ",
        "key/modulus",
    )?;
    if modulus == 0 {
        writeln!(output, "Key/modulus cannot be 0.")?;
        return Ok(None);
    }

    let sender_checksum = generate_checksum(sent_data, modulus)?;
    writeln!(output, "\nSender Checksum: {}", sender_checksum)?;

    let received_data = prompt_int(
        input,
        output,
        "\nEnter received data: ",
        "received data",
    )?;

    let outcome = verify(sent_data, modulus, received_data)?;
    writeln!(output, "Receiver Checksum: {}", outcome.receiver_checksum())?;
    writeln!(output, "\n{}", outcome.message())?;
    output.flush()?;

    Ok(Some(outcome))
}

/// Print `prompt` and read lines until one parses as an integer.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<i64, ConsoleError> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::UnexpectedEof(what));
        }

        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a whole number.")?,
        }
    }
}
