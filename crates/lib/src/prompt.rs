//! Interactive console questions for the binaries. Nothing here is needed when
//! every parameter comes from the command line.

use crate::error::Error;
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

/// Prints `message`, then reads one line and returns it without the line ending.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, Error> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(
            io::Error::new(io::ErrorKind::UnexpectedEof, "no answer on standard input").into(),
        );
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Like [`ask`], parsing the trimmed answer.
pub fn ask_parsed<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    let answer = ask(input, output, message)?;
    let trimmed = answer.trim();
    trimmed.parse().map_err(|e: T::Err| Error::InvalidInput {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Returns `value` if it was given, otherwise asks on the process's stdin/stdout.
pub fn or_ask<T>(value: Option<T>, message: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(value) => Ok(value),
        None => ask_parsed(&mut io::stdin().lock(), &mut io::stdout(), message),
    }
}
